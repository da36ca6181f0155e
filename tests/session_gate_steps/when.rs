//! When steps for session gate BDD scenarios.

use super::world::{GateWorld, run_async};
use eyre::WrapErr;
use issueboard::session::domain::AuthMode;
use rstest_bdd_macros::when;

fn submit_credentials(world: &mut GateWorld, mode: AuthMode, email: String, password: String) {
    if world.form.mode() != mode {
        world.form.toggle_mode();
    }
    world.form.set_email(email);
    world.form.set_password(password);
    let result = run_async(world.entry.submit(&mut world.form));
    if let Err(err) = result {
        tracing::debug!(error = %err, "scenario credential submission failed");
    }
}

#[when(r#"the visitor creates an account with "{email}" and "{password}""#)]
fn create_account(world: &mut GateWorld, email: String, password: String) {
    submit_credentials(world, AuthMode::CreateAccount, email, password);
}

#[when(r#"the visitor signs in with "{email}" and "{password}""#)]
fn sign_in(world: &mut GateWorld, email: String, password: String) {
    submit_credentials(world, AuthMode::SignIn, email, password);
}

#[when("the user signs out")]
fn sign_out(world: &mut GateWorld) -> Result<(), eyre::Report> {
    run_async(world.gate.sign_out()).wrap_err("sign out")?;
    Ok(())
}
