use crate::extraction::PageFragments;
use crate::model::{Line, TextFragment};

/// Maximum y distance between a fragment and a cluster's representative
/// for them to share a visual row. Text layers report each run's
/// baseline with sub-pixel jitter, so exact-y grouping fails.
const Y_TOLERANCE: f32 = 0.6;

/// Reconstruct ordered lines from the positioned fragments of all pages.
///
/// Fragments on one page are clustered by y within [`Y_TOLERANCE`],
/// each cluster is sorted left-to-right and joined with single spaces,
/// and the resulting lines are ordered by (page ascending, y
/// descending) - top-to-bottom reading order in upward-y space.
/// Deterministic for identical input.
pub fn reconstruct_lines(pages: &[PageFragments]) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();

    for page in pages {
        let mut clusters: Vec<Vec<TextFragment>> = Vec::new();

        for fragment in &page.fragments {
            if fragment.text.trim().is_empty() {
                continue;
            }
            let slot = clusters
                .iter_mut()
                .find(|cluster| (cluster[0].y - fragment.y).abs() <= Y_TOLERANCE);
            match slot {
                Some(cluster) => cluster.push(fragment.clone()),
                None => clusters.push(vec![fragment.clone()]),
            }
        }

        for mut cluster in clusters {
            cluster.sort_by(|a, b| a.x.total_cmp(&b.x));
            let text = collapse_whitespace(
                &cluster
                    .iter()
                    .map(|f| f.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" "),
            );
            if text.is_empty() {
                continue;
            }
            lines.push(Line {
                page: page.page_number,
                y: cluster[0].y,
                text,
                spans: cluster,
            });
        }
    }

    lines.sort_by(|a, b| a.page.cmp(&b.page).then(b.y.total_cmp(&a.y)));
    lines
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frag(text: &str, x: f32, y: f32, page: usize) -> TextFragment {
        TextFragment {
            text: text.to_string(),
            x,
            y,
            page,
        }
    }

    fn single_page(fragments: Vec<TextFragment>) -> Vec<PageFragments> {
        vec![PageFragments {
            page_number: 1,
            fragments,
        }]
    }

    #[test]
    fn test_fragments_with_jittered_y_share_a_line() {
        let pages = single_page(vec![
            frag("SYD", 120.0, 700.2, 1),
            frag("07DEC25", 10.0, 700.0, 1),
            frag("BNE", 150.0, 699.7, 1),
        ]);
        let lines = reconstruct_lines(&pages);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "07DEC25 SYD BNE");
    }

    #[test]
    fn test_distant_y_starts_a_new_line() {
        let pages = single_page(vec![
            frag("FIRST", 10.0, 700.0, 1),
            frag("SECOND", 10.0, 688.0, 1),
        ]);
        let lines = reconstruct_lines(&pages);
        assert_eq!(lines.len(), 2);
        // higher y comes first (top of page)
        assert_eq!(lines[0].text, "FIRST");
        assert_eq!(lines[1].text, "SECOND");
    }

    #[test]
    fn test_whitespace_fragments_dropped() {
        let pages = single_page(vec![
            frag("  ", 5.0, 700.0, 1),
            frag("TEXT", 10.0, 700.0, 1),
        ]);
        let lines = reconstruct_lines(&pages);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "TEXT");
        assert_eq!(lines[0].spans.len(), 1);
    }

    #[test]
    fn test_pages_ordered_before_y() {
        let pages = vec![
            PageFragments {
                page_number: 1,
                fragments: vec![frag("P1-BOTTOM", 10.0, 20.0, 1)],
            },
            PageFragments {
                page_number: 2,
                fragments: vec![frag("P2-TOP", 10.0, 800.0, 2)],
            },
        ];
        let lines = reconstruct_lines(&pages);
        assert_eq!(lines[0].text, "P1-BOTTOM");
        assert_eq!(lines[1].text, "P2-TOP");
    }

    #[test]
    fn test_internal_whitespace_collapsed() {
        let pages = single_page(vec![frag("SYD   BNE", 10.0, 700.0, 1)]);
        let lines = reconstruct_lines(&pages);
        assert_eq!(lines[0].text, "SYD BNE");
    }

    #[test]
    fn test_deterministic_for_identical_input() {
        let pages = single_page(vec![
            frag("B", 20.0, 700.4, 1),
            frag("A", 10.0, 700.0, 1),
            frag("C", 30.0, 699.6, 1),
        ]);
        let first = reconstruct_lines(&pages);
        let second = reconstruct_lines(&pages);
        assert_eq!(first.len(), second.len());
        assert_eq!(first[0].text, second[0].text);
        assert_eq!(first[0].text, "A B C");
    }
}
