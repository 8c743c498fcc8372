// src/matcher.rs
//
// Picking a detail page from ranked search hits.

use crate::config::options::MatchMode;
use crate::core::sanitize::fold;
use crate::record::Query;
use crate::specs::search::SearchHit;

pub trait Matcher {
    fn pick<'a>(&self, query: &Query, hits: &'a [SearchHit]) -> Option<&'a SearchHit>;
}

/// Trust the site's ranking.
pub struct FirstResult;

impl Matcher for FirstResult {
    fn pick<'a>(&self, _query: &Query, hits: &'a [SearchHit]) -> Option<&'a SearchHit> {
        hits.first()
    }
}

/// Highest Jaro-Winkler score between "title artist" and the hit label, if >= threshold.
/// Ties keep the earlier (better ranked) hit.
pub struct BestSimilarity {
    pub threshold: f64,
}

impl BestSimilarity {
    pub fn score(query: &Query, hit: &SearchHit) -> f64 {
        let wanted = match &query.artist {
            Some(a) => fold(&join!(&query.title, " ", a)),
            None => fold(&query.title),
        };
        strsim::jaro_winkler(&wanted, &fold(&hit.label))
    }
}

impl Matcher for BestSimilarity {
    fn pick<'a>(&self, query: &Query, hits: &'a [SearchHit]) -> Option<&'a SearchHit> {
        let mut best: Option<(&SearchHit, f64)> = None;
        for hit in hits {
            let score = Self::score(query, hit);
            log::debug!("match score {:.3} for '{}'", score, hit.label);
            if score < self.threshold { continue; }
            match best {
                Some((_, b)) if b >= score => {}
                _ => best = Some((hit, score)),
            }
        }
        best.map(|(hit, _)| hit)
    }
}

pub fn from_mode(mode: MatchMode) -> Box<dyn Matcher> {
    match mode {
        MatchMode::First => Box::new(FirstResult),
        MatchMode::Similarity(threshold) => Box::new(BestSimilarity { threshold }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(link: &str, label: &str) -> SearchHit {
        SearchHit { link: s!(link), label: s!(label) }
    }

    #[test]
    fn similarity_prefers_closest_label() {
        let hits = vec![
            hit("/Nas/Halftime-(Remix)/", "Halftime (Butcher Remix) Nas feat. Large Professor"),
            hit("/Nas/Halftime/", "Halftime Nas"),
        ];
        let q = Query::new("Halftime", Some("Nas"));
        let m = BestSimilarity { threshold: 0.5 };
        assert_eq!(m.pick(&q, &hits).map(|h| h.link.as_str()), Some("/Nas/Halftime/"));
        assert_eq!(FirstResult.pick(&q, &hits).map(|h| h.link.as_str()), Some("/Nas/Halftime-(Remix)/"));
    }

    #[test]
    fn similarity_declines_below_threshold() {
        let hits = vec![hit("/Kenny-Burrell/Midnight-Blue/", "Midnight Blue Kenny Burrell")];
        let q = Query::new("Halftime", Some("Nas"));
        assert!(BestSimilarity { threshold: 0.95 }.pick(&q, &hits).is_none());
    }
}
