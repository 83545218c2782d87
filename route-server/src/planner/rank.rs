//! Route ranking for query results.

use crate::domain::Route;

/// Rank routes by hop count, fewest first.
///
/// The sort is stable: routes with the same hop count keep the order the
/// enumeration produced them in. No other attribute is considered.
pub fn rank_routes(mut routes: Vec<Route>) -> Vec<Route> {
    routes.sort_by_key(Route::hop_count);
    routes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{City, Link, RouteSegment};

    fn route(cities: &[&str], prefix: &str) -> Route {
        let segments = cities
            .windows(2)
            .map(|w| {
                RouteSegment::new(
                    City::parse(w[0]).unwrap(),
                    City::parse(w[1]).unwrap(),
                    Link::new(prefix, "L"),
                )
            })
            .collect();
        Route::new(segments).unwrap()
    }

    fn summary(routes: &[Route]) -> Vec<(usize, String)> {
        routes
            .iter()
            .map(|r| (r.hop_count(), r.segments()[0].link.prefix.clone()))
            .collect()
    }

    #[test]
    fn rank_empty() {
        assert!(rank_routes(Vec::new()).is_empty());
    }

    #[test]
    fn rank_by_hop_count() {
        let routes = vec![
            route(&["A", "B", "C", "D"], "3"),
            route(&["A", "D"], "1"),
            route(&["A", "C", "D"], "2"),
        ];

        let ranked = rank_routes(routes);
        assert_eq!(
            summary(&ranked),
            vec![(1, "1".into()), (2, "2".into()), (3, "3".into())]
        );
    }

    #[test]
    fn equal_hop_counts_keep_enumeration_order() {
        let routes = vec![
            route(&["A", "X", "D"], "first"),
            route(&["A", "D"], "direct"),
            route(&["A", "Y", "D"], "second"),
            route(&["A", "Z", "D"], "third"),
        ];

        let ranked = rank_routes(routes);
        assert_eq!(
            summary(&ranked),
            vec![
                (1, "direct".into()),
                (2, "first".into()),
                (2, "second".into()),
                (2, "third".into()),
            ]
        );
    }

    #[test]
    fn carrier_does_not_affect_order() {
        let mut with_carrier = route(&["A", "B", "D"], "b");
        let segments = with_carrier
            .segments()
            .iter()
            .cloned()
            .map(|mut s| {
                s.link = s.link.with_carrier("ZZZ");
                s
            })
            .collect();
        with_carrier = Route::new(segments).unwrap();

        let routes = vec![with_carrier, route(&["A", "C", "D"], "c")];
        let ranked = rank_routes(routes);
        assert_eq!(summary(&ranked), vec![(2, "b".into()), (2, "c".into())]);
    }
}
