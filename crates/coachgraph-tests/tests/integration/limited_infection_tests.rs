use coachgraph_core::{
    limited_infection, limited_infection_with_config, ComponentOrder, ExecError,
    InfectionConfig, InfectionOutcome,
};
use coachgraph_tests::{count_infected, load_fixture};

#[test]
fn whole_graph_fits_in_range() -> Result<(), ExecError> {
    let mut g = load_fixture("graph1.json")?;
    let outcome = limited_infection(&mut g, "limited1", 1, 5);
    assert!(outcome.is_success());
    assert_eq!(count_infected(&g, "limited1"), 4);
    Ok(())
}

#[test]
fn minimum_above_population_fails_cleanly() -> Result<(), ExecError> {
    let mut g = load_fixture("graph1.json")?;
    let before = g.clone();
    assert_eq!(
        limited_infection(&mut g, "limited2", 5, 10),
        InfectionOutcome::Infeasible
    );
    assert_eq!(g, before);
    Ok(())
}

#[test]
fn single_large_component_is_split_by_class() -> Result<(), ExecError> {
    let mut g = load_fixture("graph2.json")?;
    let outcome = limited_infection(&mut g, "limited3", 4, 8);
    assert!(outcome.is_success());

    let n = count_infected(&g, "limited3");
    assert!((4..=8).contains(&n), "infected {n}");
    assert!(n < g.len());
    assert_eq!(n, outcome.count());
    Ok(())
}

#[test]
fn small_component_chosen_over_large_one() -> Result<(), ExecError> {
    let mut g = load_fixture("graph3.json")?;
    assert!(limited_infection(&mut g, "limited4", 3, 5).is_success());
    for user in g.users() {
        let in_small = user.id().as_str() >= "J";
        assert_eq!(user.has_feature("limited4"), in_small, "{}", user.id());
    }
    Ok(())
}

#[test]
fn wider_range_keeps_small_component_whole() -> Result<(), ExecError> {
    let mut g = load_fixture("graph3.json")?;
    assert!(limited_infection(&mut g, "limited5", 3, 8).is_success());
    for user in g.users() {
        if user.id().as_str() >= "J" {
            assert!(user.has_feature("limited5"), "{}", user.id());
        }
    }
    let n = count_infected(&g, "limited5");
    assert!((4..=8).contains(&n));
    assert!(n < g.len());
    Ok(())
}

#[test]
fn both_components_needed_for_high_minimum() -> Result<(), ExecError> {
    let mut g = load_fixture("graph3.json")?;
    assert!(limited_infection(&mut g, "limited6", 11, 15).is_success());
    assert_eq!(count_infected(&g, "limited6"), 13);
    Ok(())
}

#[test]
fn class_packing_tops_up_component_packing() -> Result<(), ExecError> {
    // Discovery order packs A-I first only if it fits; with max 6 it does not,
    // so J-M (4) goes in whole and a class from A-I supplies the rest.
    let mut g = load_fixture("graph3.json")?;
    let config = InfectionConfig {
        component_order: ComponentOrder::Discovery,
    };
    let outcome = limited_infection_with_config(&mut g, "mix", 6, 7, &config);
    let infected = outcome.infected().expect("4 + class of 3 fits in [6, 7]");
    assert_eq!(infected.len(), 7);
    for id in ["J", "K", "L", "M", "A", "B", "C"] {
        assert!(infected.contains(id), "{id}");
    }
    Ok(())
}

#[test]
fn zero_minimum_infects_nobody() -> Result<(), ExecError> {
    let mut g = load_fixture("graph3.json")?;
    let outcome = limited_infection(&mut g, "none", 0, 13);
    assert!(outcome.is_success());
    assert_eq!(outcome.count(), 0);
    assert_eq!(count_infected(&g, "none"), 0);
    Ok(())
}

#[test]
fn negated_feature_removes_from_selection() -> Result<(), ExecError> {
    let mut g = load_fixture("graph3.json")?;
    assert!(limited_infection(&mut g, "beta", 13, 13).is_success());
    assert!(limited_infection(&mut g, "!beta", 3, 5).is_success());
    assert_eq!(count_infected(&g, "beta"), 9);
    Ok(())
}
