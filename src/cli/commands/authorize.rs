//! Check route access for a role

use ecoinspect::config::Config;
use ecoinspect::core::models::Role;
use ecoinspect::output::{AccessResult, OutputMode};

/// Decide whether `role` may reach `route`; fails when access is denied
pub fn authorize(
    route: &str,
    role: Option<&str>,
    config: &Config,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let role = role.map(str::parse::<Role>).transpose()?;
    let table = config.route_table();
    let decision = table.authorize(route, role);

    let result = AccessResult {
        route: route.to_string(),
        role,
        allowed: decision.is_ok(),
        allowed_roles: table.policy(route).map(|p| p.roles().collect()).unwrap_or_default(),
        reason: decision.as_ref().err().map(ToString::to_string),
    };
    result.render(mode);

    decision?;
    Ok(())
}
