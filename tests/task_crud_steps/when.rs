//! When steps for task CRUD BDD scenarios.

use super::world::{TaskCrudWorld, run_async};
use rstest_bdd_macros::when;
use taskboard::task::services::UpdateTaskRequest;

#[when("the form is submitted")]
fn submit_form(world: &mut TaskCrudWorld) -> Result<(), eyre::Report> {
    let request = world
        .pending_request
        .clone()
        .ok_or_else(|| eyre::eyre!("missing pending request in scenario world"))?;

    let result = run_async(world.service.create_task(request));
    if let Ok(task) = &result {
        world.target_task = Some(task.clone());
    }
    world.last_create_result = Some(result);
    Ok(())
}

#[when("the task completion is toggled")]
fn toggle_completion(world: &mut TaskCrudWorld) -> Result<(), eyre::Report> {
    let target = world
        .target_task
        .clone()
        .ok_or_else(|| eyre::eyre!("missing target task in scenario world"))?;
    let toggled = run_async(world.service.toggle_task(target.id()))
        .map_err(|err| eyre::eyre!("toggle failed: {err}"))?;
    world.target_task = Some(toggled);
    Ok(())
}

#[when("the task is deleted")]
fn delete_task(world: &mut TaskCrudWorld) -> Result<(), eyre::Report> {
    let target = world
        .target_task
        .clone()
        .ok_or_else(|| eyre::eyre!("missing target task in scenario world"))?;
    run_async(world.service.delete_task(target.id()))
        .map_err(|err| eyre::eyre!("delete failed: {err}"))?;
    Ok(())
}

#[when(r#"the task is updated with title "{title}" and no description"#)]
fn update_task(world: &mut TaskCrudWorld, title: String) -> Result<(), eyre::Report> {
    let target = world
        .target_task
        .clone()
        .ok_or_else(|| eyre::eyre!("missing target task in scenario world"))?;
    let updated = run_async(
        world
            .service
            .update_task(target.id(), UpdateTaskRequest::new(title)),
    )
    .map_err(|err| eyre::eyre!("update failed: {err}"))?;
    world.target_task = Some(updated);
    Ok(())
}
