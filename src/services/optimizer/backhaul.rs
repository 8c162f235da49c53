use crate::models::{BackhaulInfo, OptimizedRoute};
use std::collections::HashMap;

/// Pairs each route with an outgoing route from its destination so the
/// vehicle does not return empty. First match wins.
pub struct BackhaulMatcher {
    savings_rate: f64,
}

impl BackhaulMatcher {
    pub fn new(savings_rate: f64) -> Self {
        Self { savings_rate }
    }

    pub fn apply(&self, mut routes: Vec<OptimizedRoute>) -> Vec<OptimizedRoute> {
        let mut outgoing: HashMap<String, Vec<usize>> = HashMap::new();
        for (index, route) in routes.iter().enumerate() {
            if let Some(origin) = route.origin() {
                outgoing.entry(origin.to_string()).or_default().push(index);
            }
        }

        let pairs: Vec<(usize, BackhaulInfo)> = routes
            .iter()
            .enumerate()
            .filter_map(|(index, route)| {
                let destination = route.destination()?;
                let paired = outgoing
                    .get(destination)?
                    .iter()
                    .find(|&&candidate| candidate != index)?;
                let paired = &routes[*paired];

                Some((
                    index,
                    BackhaulInfo {
                        route_id: paired.id.clone(),
                        savings: paired.total_cost * self.savings_rate,
                        destination: paired.destination()?.to_string(),
                    },
                ))
            })
            .collect();

        tracing::debug!(paired = pairs.len(), "Matched backhaul routes");

        for (index, backhaul) in pairs {
            let route = &mut routes[index];
            route.has_backhaul = true;
            route.backhaul = Some(backhaul);
        }

        routes
    }
}
