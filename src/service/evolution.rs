use crate::api::resource_id;
use crate::api::wire::RawChainLink;
use schema::EvolutionNode;

/// Rebuilds an evolution chain response into a materialized tree.
///
/// Each stage's id is the trailing path segment of its species locator.
/// Chains are acyclic and a few levels deep, so plain recursion is enough.
pub fn reconcile_chain(link: &RawChainLink) -> EvolutionNode {
    EvolutionNode {
        id: resource_id(&link.species.url).unwrap_or_default().to_string(),
        name: link.species.name.clone(),
        evolves_to: link.evolves_to.iter().map(reconcile_chain).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::wire::RawEvolutionChain;
    use pretty_assertions::assert_eq;

    fn species_link(id: u32, name: &str, evolves_to: Vec<serde_json::Value>) -> serde_json::Value {
        serde_json::json!({
            "species": {
                "name": name,
                "url": format!("https://pokeapi.co/api/v2/pokemon-species/{}/", id)
            },
            "evolves_to": evolves_to
        })
    }

    #[test]
    fn test_branching_chain_preserves_shape() {
        // root -> [a, b], a -> [a1]
        let json = serde_json::json!({
            "chain": species_link(1, "root", vec![
                species_link(2, "a", vec![species_link(3, "a1", vec![])]),
                species_link(4, "b", vec![]),
            ])
        });
        let raw: RawEvolutionChain = serde_json::from_value(json).unwrap();

        let tree = reconcile_chain(&raw.chain);

        assert_eq!(tree.id, "1");
        assert_eq!(tree.evolves_to.len(), 2);
        assert_eq!(tree.evolves_to[0].name, "a");
        assert_eq!(tree.evolves_to[0].evolves_to.len(), 1);
        assert_eq!(tree.evolves_to[0].evolves_to[0].id, "3");
        assert_eq!(tree.evolves_to[1].id, "4");
        assert!(tree.evolves_to[1].is_leaf());
    }

    #[test]
    fn test_single_stage_chain_is_a_leaf() {
        let raw: RawEvolutionChain = serde_json::from_value(serde_json::json!({
            "chain": species_link(132, "ditto", vec![])
        }))
        .unwrap();

        let tree = reconcile_chain(&raw.chain);

        assert_eq!(
            tree,
            EvolutionNode {
                id: "132".to_string(),
                name: "ditto".to_string(),
                evolves_to: vec![],
            }
        );
    }
}
