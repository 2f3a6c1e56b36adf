use coachgraph_core::{total_infection, ExecError};
use coachgraph_tests::{count_infected, load_fixture};

#[test]
fn infection_from_coach_reaches_everyone() -> Result<(), ExecError> {
    let mut g = load_fixture("graph1.json")?;
    total_infection(&mut g, "A", "coach")?;
    assert_eq!(count_infected(&g, "coach"), 4);
    Ok(())
}

#[test]
fn infection_from_student_reaches_coach_and_siblings() -> Result<(), ExecError> {
    let mut g = load_fixture("graph1.json")?;
    total_infection(&mut g, "C", "student")?;
    assert_eq!(count_infected(&g, "student"), 4);
    Ok(())
}

#[test]
fn infection_is_transitive() -> Result<(), ExecError> {
    let mut g = load_fixture("graph2.json")?;
    total_infection(&mut g, "I", "transitive")?;
    assert_eq!(count_infected(&g, "transitive"), 9);
    Ok(())
}

#[test]
fn infection_stays_within_component() -> Result<(), ExecError> {
    let mut g = load_fixture("graph3.json")?;
    total_infection(&mut g, "A", "component1")?;
    total_infection(&mut g, "K", "component2")?;

    for user in g.users() {
        let in_first = user.id().as_str() < "J";
        assert_eq!(user.has_feature("component1"), in_first, "{}", user.id());
        assert_eq!(user.has_feature("component2"), !in_first, "{}", user.id());
    }
    Ok(())
}

#[test]
fn repeated_infection_is_idempotent() -> Result<(), ExecError> {
    let mut once = load_fixture("graph3.json")?;
    total_infection(&mut once, "B", "login")?;

    let mut twice = once.clone();
    total_infection(&mut twice, "H", "login")?;
    assert_eq!(once, twice);
    Ok(())
}

#[test]
fn discard_restores_previous_labels() -> Result<(), ExecError> {
    let mut g = load_fixture("graph3.json")?;
    total_infection(&mut g, "J", "home")?;
    let before = g.clone();

    total_infection(&mut g, "A", "points")?;
    total_infection(&mut g, "D", "!points")?;
    assert_eq!(g, before);
    Ok(())
}

#[test]
fn unknown_seed_is_an_error() -> Result<(), ExecError> {
    let mut g = load_fixture("graph1.json")?;
    let before = g.clone();
    let err = total_infection(&mut g, "Z", "x").unwrap_err();
    assert!(matches!(err, ExecError::UnknownUser(ref id) if id == "Z"));
    assert_eq!(g, before);
    Ok(())
}
