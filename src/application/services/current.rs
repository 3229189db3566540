//! Application service — active-component lookup.

use anyhow::Result;

use crate::application::ports::CurrentTracker;
use crate::domain::error::ComponentError;
use crate::domain::scope::Scope;

/// The active component for `scope`.
///
/// Commands that accept an optional component argument use this to default
/// an unspecified target.
///
/// # Errors
///
/// Returns [`ComponentError::NoneActive`] when no component has been set
/// for the scope.
pub async fn active_component(tracker: &impl CurrentTracker, scope: &Scope) -> Result<String> {
    tracker
        .current(scope)
        .await?
        .ok_or_else(|| ComponentError::NoneActive.into())
}
