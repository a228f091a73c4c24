use std::time::Duration;

use gpui::{App, ElementId, Window, ease_out_quint};
use gpui_transitions::{Transition, TransitionGoal};

use crate::ElementIdExt;

/// Animates a keyed value toward `goal`, starting a new glide whenever the
/// goal changes between frames.
pub fn transition_to<T>(
    id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    duration: Duration,
    goal: T,
) -> Transition<T>
where
    T: TransitionGoal + Clone + PartialEq + 'static,
{
    let initial = goal.clone();
    let transition = Transition::new(id, window, cx, duration, move |_window, _cx| {
        initial.clone()
    })
    .with_easing(ease_out_quint());

    if transition.set(cx, goal) {
        cx.notify(transition.entity_id());
    }

    transition
}

/// Fades an element toward its disabled opacity and back.
pub fn disabled_transition(
    base_id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    is_disabled: bool,
) -> Transition<f32> {
    transition_to(
        base_id.into().with_suffix("state:transition:disabled"),
        window,
        cx,
        Duration::from_millis(365),
        if is_disabled { 0.45 } else { 1. },
    )
}
