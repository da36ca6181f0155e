//! Given steps for issue board BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use issueboard::issue::{
    domain::{IssueDraft, IssueStatus, NewIssue},
    ports::IssueStore,
};
use issueboard::session::domain::{EmailAddress, Principal, PrincipalId};
use rstest_bdd_macros::given;

#[given(r#"a signed-in user "{email}""#)]
fn signed_in_user(world: &mut BoardWorld, email: String) -> Result<(), eyre::Report> {
    let address = EmailAddress::parse(&email).wrap_err("parse scenario email")?;
    world
        .board
        .set_principal(Some(Principal::new(PrincipalId::new(), address)));
    Ok(())
}

#[given(r#"an existing issue titled "{title}" with status "{status}""#)]
fn existing_issue(
    world: &mut BoardWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let parsed_status: IssueStatus = status.parse().wrap_err("parse scenario status")?;
    let draft = IssueDraft::new(title, "Seeded for the scenario")
        .wrap_err("build seed draft")?
        .with_status(parsed_status);
    run_async(world.store.insert(&NewIssue::new(draft, "seed@example.com")))
        .wrap_err("seed existing issue")?;
    Ok(())
}

#[given("the board has been loaded")]
fn board_loaded(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    run_async(world.board.load_issues()).wrap_err("load board")?;
    Ok(())
}
