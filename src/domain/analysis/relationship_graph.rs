//! Relationship graph - the 7S elements as nodes and their interdependencies as links.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SevenSElement;
use crate::domain::model::SevenSModel;

use SevenSElement::*;

/// Links between elements, each with its strength.
///
/// Shared values connect to every other element; elements within the hard
/// and soft groups connect to each other; three links cross the groups.
const LINKS: [(SevenSElement, SevenSElement, u8); 15] = [
    (SharedValues, Strategy, 3),
    (SharedValues, Structure, 3),
    (SharedValues, Systems, 3),
    (SharedValues, Staff, 3),
    (SharedValues, Skills, 3),
    (SharedValues, Style, 3),
    (Strategy, Structure, 2),
    (Strategy, Systems, 2),
    (Structure, Systems, 2),
    (Staff, Skills, 2),
    (Staff, Style, 2),
    (Skills, Style, 2),
    (Strategy, Skills, 1),
    (Structure, Staff, 1),
    (Systems, Style, 1),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub element: SevenSElement,
    /// Score scaled to 0-10.
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: SevenSElement,
    pub target: SevenSElement,
    pub weight: u8,
}

/// Node and link data for drawing the 7S diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipGraph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

impl RelationshipGraph {
    pub fn of(model: &SevenSModel) -> Self {
        let nodes = model
            .element_scores()
            .into_iter()
            .map(|(element, score)| GraphNode {
                element,
                value: score.value() * 10.0,
                color: element.color_hex().to_string(),
            })
            .collect();

        let links = LINKS
            .iter()
            .map(|&(source, target, weight)| GraphLink {
                source,
                target,
                weight,
            })
            .collect();

        Self { nodes, links }
    }

    /// Links touching `element`.
    pub fn links_of(&self, element: SevenSElement) -> impl Iterator<Item = &GraphLink> {
        self.links
            .iter()
            .filter(move |link| link.source == element || link.target == element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::company::CompanyProfile;
    use crate::domain::foundation::Fraction;

    fn graph() -> RelationshipGraph {
        RelationshipGraph::of(&SevenSModel::seeded(
            &CompanyProfile::test_fixture(),
            Fraction::new(0.7),
        ))
    }

    #[test]
    fn graph_has_seven_nodes_and_fifteen_links() {
        let graph = graph();
        assert_eq!(graph.nodes.len(), 7);
        assert_eq!(graph.links.len(), 15);
    }

    #[test]
    fn node_value_is_score_times_ten() {
        for node in graph().nodes {
            assert!((node.value - 7.0).abs() < 1e-9);
        }
    }

    #[test]
    fn shared_values_connects_to_every_other_element() {
        let graph = graph();
        let links: Vec<_> = graph.links_of(SharedValues).collect();
        assert_eq!(links.len(), 6);
        assert!(links.iter().all(|link| link.weight == 3));
    }

    #[test]
    fn no_link_is_duplicated_or_a_self_loop() {
        let graph = graph();
        for (i, a) in graph.links.iter().enumerate() {
            assert_ne!(a.source, a.target);
            for b in &graph.links[i + 1..] {
                let same = (a.source == b.source && a.target == b.target)
                    || (a.source == b.target && a.target == b.source);
                assert!(!same, "duplicate link {:?}", a);
            }
        }
    }

    #[test]
    fn cross_group_links_are_weakest() {
        for link in graph().links {
            if link.source.is_hard() != link.target.is_hard()
                && link.source != SharedValues
                && link.target != SharedValues
            {
                assert_eq!(link.weight, 1);
            }
        }
    }
}
