//! Then steps for issue board BDD scenarios.

use super::world::{BoardWorld, run_async};
use issueboard::board::services::SubmitOutcome;
use issueboard::issue::ports::IssueStore;
use rstest_bdd_macros::then;

#[then("the issue count is {count:usize}")]
fn issue_count(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let stored = run_async(world.store.list_newest_first())
        .map_err(|err| eyre::eyre!("store read failed: {err}"))?;
    if stored.len() != count {
        return Err(eyre::eyre!(
            "expected {count} stored issues, found {}",
            stored.len()
        ));
    }
    if world.board.state().issues().len() != count {
        return Err(eyre::eyre!(
            "expected {count} cached issues, found {}",
            world.board.state().issues().len()
        ));
    }
    Ok(())
}

#[then(r#"the newest issue was created by "{email}" with status "{status}""#)]
fn newest_issue_attribution(
    world: &BoardWorld,
    email: String,
    status: String,
) -> Result<(), eyre::Report> {
    let newest = world
        .board
        .state()
        .issues()
        .first()
        .ok_or_else(|| eyre::eyre!("board has no issues"))?;
    if newest.created_by() != email {
        return Err(eyre::eyre!(
            "expected creator {email}, found {}",
            newest.created_by()
        ));
    }
    if newest.status().as_str() != status {
        return Err(eyre::eyre!(
            "expected status {status}, found {}",
            newest.status()
        ));
    }
    Ok(())
}

#[then(r#"a duplicate warning names "{title}""#)]
fn duplicate_warning_names(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    let outcome = world
        .last_outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing submission outcome in scenario world"))?;
    match outcome {
        Ok(SubmitOutcome::DuplicateWarning(similar)) if similar.title() == title => {}
        other => {
            return Err(eyre::eyre!(
                "expected a duplicate warning for {title}, got {other:?}"
            ));
        }
    }
    let warning = world
        .board
        .state()
        .duplicate_warning()
        .ok_or_else(|| eyre::eyre!("board state holds no duplicate warning"))?;
    let expected_prompt = format!("Similar issue found: \"{title}\". Create anyway?");
    if warning.prompt() != expected_prompt {
        return Err(eyre::eyre!("unexpected prompt: {}", warning.prompt()));
    }
    Ok(())
}

#[then("no duplicate warning is shown")]
fn no_duplicate_warning(world: &BoardWorld) -> Result<(), eyre::Report> {
    if let Some(warning) = world.board.state().duplicate_warning() {
        return Err(eyre::eyre!("unexpected duplicate warning: {warning}"));
    }
    Ok(())
}

#[then(r#"the board notice reads "{message}""#)]
fn board_notice_reads(world: &BoardWorld, message: String) -> Result<(), eyre::Report> {
    let notice = world
        .last_notice
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing status change result in scenario world"))?
        .as_ref()
        .map_err(|err| eyre::eyre!("status change request failed: {err}"))?;
    if notice.to_string() != message {
        return Err(eyre::eyre!("expected notice {message:?}, found {notice}"));
    }
    if world.board.state().notice() != Some(notice) {
        return Err(eyre::eyre!("board state does not hold the latest notice"));
    }
    Ok(())
}

#[then(r#"the issue "{title}" still has status "{status}""#)]
fn issue_still_has_status(
    world: &BoardWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let stored = run_async(world.store.list_newest_first())
        .map_err(|err| eyre::eyre!("store read failed: {err}"))?;
    let issue = stored
        .iter()
        .find(|issue| issue.title() == title)
        .ok_or_else(|| eyre::eyre!("no stored issue titled {title}"))?;
    if issue.status().as_str() != status {
        return Err(eyre::eyre!(
            "expected stored status {status}, found {}",
            issue.status()
        ));
    }
    Ok(())
}

#[then(r#"the visible issues are "{titles}""#)]
fn visible_issues_are(world: &BoardWorld, titles: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = titles.split(", ").collect();
    let state = world.board.state();
    let visible: Vec<&str> = state
        .filtered_issues()
        .into_iter()
        .map(|issue| issue.title())
        .collect();
    if visible != expected {
        return Err(eyre::eyre!("expected {expected:?}, found {visible:?}"));
    }
    Ok(())
}
