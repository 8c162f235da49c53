use super::ids::IdGenerator;
use crate::models::{ClusterInfo, Coordinates, Shipment};
use crate::services::gazetteer::{city_token, region_token, resolve_coordinates};
use std::collections::HashMap;

/// Groups shipments by destination region, splitting large regions per city
pub struct ClusterBuilder<'a> {
    city_split_threshold: usize,
    ids: &'a dyn IdGenerator,
}

impl<'a> ClusterBuilder<'a> {
    pub fn new(city_split_threshold: usize, ids: &'a dyn IdGenerator) -> Self {
        Self {
            city_split_threshold,
            ids,
        }
    }

    /// Build clusters in first-appearance order of their region (and city)
    pub fn build(&self, shipments: &[Shipment]) -> Vec<ClusterInfo> {
        let regions = group_by(shipments, |s| region_token(&s.destination));
        let mut clusters = Vec::new();

        for (region, members) in regions {
            if members.len() > self.city_split_threshold {
                tracing::debug!(
                    region = %region,
                    shipments = members.len(),
                    "Splitting large region into city clusters"
                );

                for (city, city_members) in group_by(&members, |s| city_token(&s.destination)) {
                    let centroid = resolve_coordinates(&city).unwrap_or_default();
                    clusters.push(ClusterInfo::new(
                        self.ids.next_id("cluster"),
                        format!("{}, {}", city, region),
                        region.clone(),
                        city_members,
                        centroid,
                    ));
                }
            } else {
                let centroid = destination_centroid(&members);
                clusters.push(ClusterInfo::new(
                    self.ids.next_id("cluster"),
                    region.clone(),
                    region,
                    members,
                    centroid,
                ));
            }
        }

        clusters
    }
}

/// Group shipments by a key, keeping keys and members in input order
fn group_by<F>(shipments: &[Shipment], key_of: F) -> Vec<(String, Vec<Shipment>)>
where
    F: Fn(&Shipment) -> &str,
{
    let mut groups: Vec<(String, Vec<Shipment>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for shipment in shipments {
        let key = key_of(shipment);
        match index.get(key) {
            Some(&i) => groups[i].1.push(shipment.clone()),
            None => {
                index.insert(key.to_string(), groups.len());
                groups.push((key.to_string(), vec![shipment.clone()]));
            }
        }
    }

    groups
}

/// Mean of the distinct resolvable destinations; {0, 0} if none resolve
fn destination_centroid(shipments: &[Shipment]) -> Coordinates {
    let mut destinations: Vec<&str> = Vec::new();
    for shipment in shipments {
        if !destinations.contains(&shipment.destination.as_str()) {
            destinations.push(&shipment.destination);
        }
    }

    let points: Vec<Coordinates> = destinations
        .into_iter()
        .filter_map(resolve_coordinates)
        .collect();

    Coordinates::mean(&points).unwrap_or_default()
}
