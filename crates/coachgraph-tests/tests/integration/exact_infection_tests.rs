use coachgraph_core::{exact_limited_infection, CoachingGraph, ExecError, InfectionOutcome};
use coachgraph_tests::{count_infected, load_fixture};

#[test]
fn single_component_cannot_be_split() -> Result<(), ExecError> {
    let mut g = load_fixture("graph1.json")?;
    let before = g.clone();
    assert_eq!(
        exact_limited_infection(&mut g, "exact1", 3),
        InfectionOutcome::Infeasible
    );
    assert_eq!(g, before);
    Ok(())
}

#[test]
fn whole_single_component_succeeds() -> Result<(), ExecError> {
    let mut g = load_fixture("graph1.json")?;
    assert!(exact_limited_infection(&mut g, "exact2", 4).is_success());
    assert_eq!(count_infected(&g, "exact2"), 4);
    Ok(())
}

#[test]
fn no_subset_of_components_matches() -> Result<(), ExecError> {
    let mut g = load_fixture("graph3.json")?;
    let before = g.clone();
    assert!(!exact_limited_infection(&mut g, "exact3", 6).is_success());
    assert_eq!(g, before);
    Ok(())
}

#[test]
fn each_component_and_both_together() -> Result<(), ExecError> {
    let mut g = load_fixture("graph3.json")?;

    assert!(exact_limited_infection(&mut g, "exact4", 4).is_success());
    assert!(exact_limited_infection(&mut g, "exact5", 9).is_success());
    assert!(exact_limited_infection(&mut g, "exact6", 13).is_success());

    for user in g.users() {
        let in_large = user.id().as_str() < "J";
        assert_eq!(user.has_feature("exact4"), !in_large, "{}", user.id());
        assert_eq!(user.has_feature("exact5"), in_large, "{}", user.id());
        assert!(user.has_feature("exact6"));
    }
    Ok(())
}

#[test]
fn sizes_one_two_three() -> Result<(), ExecError> {
    let mut g = CoachingGraph::new();
    for id in ["a", "b1", "b2", "c1", "c2", "c3"] {
        g.add_user(id);
    }
    g.add_coaching("b1", "b2")?;
    g.add_coaching("c1", "c2")?;
    g.add_coaching("c3", "c2")?;

    let before = g.clone();
    assert!(!exact_limited_infection(&mut g, "f", 7).is_success());
    assert_eq!(g, before);

    let outcome = exact_limited_infection(&mut g, "f", 4);
    let infected = outcome.infected().expect("1 + 3 = 4");
    let ids: Vec<&str> = infected.iter().map(|id| id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c1", "c2", "c3"]);
    assert_eq!(count_infected(&g, "f"), 4);
    Ok(())
}

#[test]
fn empty_graph_has_no_solution() {
    let mut g = CoachingGraph::new();
    assert!(!exact_limited_infection(&mut g, "f", 1).is_success());
}
