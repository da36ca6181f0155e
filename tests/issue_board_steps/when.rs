//! When steps for issue board BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use issueboard::board::services::DuplicateDecision;
use issueboard::issue::domain::{IssueStatus, Selection};
use rstest_bdd_macros::when;

#[when(r#"the user submits an issue titled "{title}" described as "{description}""#)]
fn submit_issue(world: &mut BoardWorld, title: String, description: String) {
    let form = world.board.state_mut().form_mut();
    form.title = title;
    form.description = description;
    world.last_outcome = Some(run_async(world.board.submit_form()));
}

#[when("the user declines the duplicate")]
fn decline_duplicate(world: &mut BoardWorld) {
    world.last_outcome = Some(run_async(
        world.board.resolve_duplicate(DuplicateDecision::Decline),
    ));
}

#[when("the user confirms the duplicate")]
fn confirm_duplicate(world: &mut BoardWorld) {
    world.last_outcome = Some(run_async(
        world.board.resolve_duplicate(DuplicateDecision::CreateAnyway),
    ));
}

#[when(r#"the user moves "{title}" to "{status}""#)]
fn move_issue(world: &mut BoardWorld, title: String, status: String) -> Result<(), eyre::Report> {
    let target: IssueStatus = status.parse().wrap_err("parse target status")?;
    let issue_id = world
        .board
        .state()
        .issues()
        .iter()
        .find(|issue| issue.title() == title)
        .map(|issue| issue.id())
        .ok_or_else(|| eyre::eyre!("no issue titled {title} on the board"))?;
    world.last_notice = Some(world.board.request_status_change(issue_id, target));
    Ok(())
}

#[when(r#"the status filter is set to "{selection}""#)]
fn set_status_filter(world: &mut BoardWorld, selection: String) -> Result<(), eyre::Report> {
    let status: Selection<IssueStatus> = selection.parse().wrap_err("parse status filter")?;
    world.board.state_mut().set_status_filter(status);
    Ok(())
}
