//! Signal binding system for reactive UI updates.
//!
//! Keeps [`DynamicText`] labels in step with the [`WorldSignals`] value named
//! by their [`SignalBinding`].

use std::borrow::Cow;

use crate::components::dynamictext::DynamicText;
use crate::components::signalbinding::SignalBinding;
use crate::resources::worldsignals::WorldSignals;
use bevy_ecs::prelude::*;

/// Updates [`DynamicText`] content from the bound signal.
///
/// Integers print as-is, scalars without a fractional part print as whole
/// numbers, strings as-is and flags as `"true"`. A format string replaces its
/// `{}` placeholder with the value. Missing signals leave the text untouched.
pub fn update_world_signals_binding_system(
    mut query: Query<(&mut DynamicText, &SignalBinding)>,
    world_signals: Res<WorldSignals>,
) {
    for (mut dynamic_text, binding) in query.iter_mut() {
        let Some(value) = world_signal_as_str(&world_signals, &binding.signal_key) else {
            continue;
        };
        let new_content = match &binding.format {
            Some(format_str) => format_str.replace("{}", &value),
            None => value.into_owned(),
        };
        if dynamic_text.content != new_content {
            dynamic_text.set_content(new_content);
        }
    }
}

fn world_signal_as_str<'a>(world_signals: &'a WorldSignals, key: &str) -> Option<Cow<'a, str>> {
    if let Some(value) = world_signals.get_integer(key) {
        return Some(Cow::Owned(value.to_string()));
    }
    if let Some(value) = world_signals.get_scalar(key) {
        return Some(Cow::Owned(if value.fract() == 0.0 {
            format!("{}", value as i64)
        } else {
            format!("{:.1}", value)
        }));
    }
    if let Some(value) = world_signals.get_string(key) {
        return Some(Cow::Borrowed(value.as_str()));
    }
    if world_signals.has_flag(key) {
        return Some(Cow::Borrowed("true"));
    }
    None
}
