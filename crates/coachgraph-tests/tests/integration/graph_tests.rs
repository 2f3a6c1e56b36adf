use coachgraph_core::generate::{random_coaching_graph, GeneratorParams};
use coachgraph_core::{all_connected_components, ExecError, UserId};
use coachgraph_tests::load_fixture;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeSet;

fn ids(items: &[&str]) -> BTreeSet<UserId> {
    items.iter().map(|s| UserId::from(*s)).collect()
}

#[test]
fn fixtures_load_with_expected_sizes() -> Result<(), ExecError> {
    assert_eq!(load_fixture("graph1.json")?.len(), 4);
    assert_eq!(load_fixture("graph2.json")?.len(), 9);
    assert_eq!(load_fixture("graph3.json")?.len(), 13);
    Ok(())
}

#[test]
fn coaching_edges_are_mirrored() -> Result<(), ExecError> {
    let g = load_fixture("graph1.json")?;
    let a = g.user("A").unwrap();
    assert_eq!(a.coaches().len(), 3);
    assert!(a.coached_by().is_empty());
    assert_eq!(g.user("B").unwrap().coached_by(), &ids(&["A"]));
    Ok(())
}

#[test]
fn graph3_has_two_components() -> Result<(), ExecError> {
    let g = load_fixture("graph3.json")?;
    let components = all_connected_components(&g);
    assert_eq!(
        components,
        vec![
            ids(&["A", "B", "C", "D", "E", "F", "G", "H", "I"]),
            ids(&["J", "K", "L", "M"]),
        ]
    );
    Ok(())
}

#[test]
fn component_reaches_through_shared_student() -> Result<(), ExecError> {
    // M only coaches L, which J also coaches.
    let g = load_fixture("graph3.json")?;
    assert_eq!(g.connected_component("M")?, ids(&["J", "K", "L", "M"]));
    Ok(())
}

#[test]
fn parents_and_classes_in_graph2() -> Result<(), ExecError> {
    let g = load_fixture("graph2.json")?;
    assert_eq!(g.all_parents(), ids(&["A", "B", "C", "G"]));
    assert!(g.all_singletons().is_empty());
    assert_eq!(g.class_of("G")?, ids(&["G", "H", "I"]));
    Ok(())
}

#[test]
fn unknown_user_lookup_fails() -> Result<(), ExecError> {
    let g = load_fixture("graph1.json")?;
    assert!(g.user("X").is_none());
    assert!(matches!(
        g.connected_component("X"),
        Err(ExecError::UnknownUser(_))
    ));
    Ok(())
}

#[test]
fn generated_graph_components_cover_every_user() -> Result<(), ExecError> {
    let params = GeneratorParams {
        num_classes: 200,
        min_size: 1,
        max_size: 12,
        existing_rate: 0.05,
    };
    let g = random_coaching_graph(&mut StdRng::seed_from_u64(2024), &params)?;
    let components = all_connected_components(&g);

    let total: usize = components.iter().map(|c| c.len()).sum();
    assert_eq!(total, g.len());
    assert_eq!(g.all_parents().len(), 200);

    // Discovery order is by smallest member id.
    let firsts: Vec<&UserId> = components.iter().filter_map(|c| c.first()).collect();
    assert!(firsts.windows(2).all(|w| w[0] < w[1]));
    Ok(())
}
