//! Re-asserts geometry once windows are known to exist.
//!
//! Launch-time rules are unreliable when the target workspace is not the
//! visible one, so every correlated window gets one atomic batch.

use stagehand_common::Geometry;
use stagehand_ipc::{Dispatch, Hyprctl, WindowHandle};

/// Commands for one window, in application order: float first, since a
/// tiled window ignores explicit geometry, then focus it so the untargeted
/// fullscreen exit hits this window, then resize and move.
pub fn window_plan(handle: &WindowHandle, geometry: Geometry) -> Vec<Dispatch> {
    let [resize, mv] = Dispatch::place(handle, geometry);
    vec![
        Dispatch::SetFloating(handle.clone()),
        Dispatch::Focus(handle.clone()),
        Dispatch::ExitFullscreenFocused,
        resize,
        mv,
    ]
}

/// Plans for every window, concatenated into one batch.
pub fn batch_plan<'a>(
    targets: impl IntoIterator<Item = (&'a WindowHandle, Geometry)>,
) -> Vec<Dispatch> {
    targets
        .into_iter()
        .flat_map(|(handle, geometry)| window_plan(handle, geometry))
        .collect()
}

pub fn enforce<'a>(
    hypr: &Hyprctl,
    targets: impl IntoIterator<Item = (&'a WindowHandle, Geometry)>,
) {
    let plan = batch_plan(targets);
    hypr.apply(&plan, "geometry enforcement");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_precedes_resize_and_move() {
        let h = WindowHandle::from("0xa");
        let plan = window_plan(&h, Geometry::new(5, 6, 70, 80));
        let float = plan
            .iter()
            .position(|d| matches!(d, Dispatch::SetFloating(_)))
            .unwrap();
        let resize = plan
            .iter()
            .position(|d| matches!(d, Dispatch::ResizeExact { .. }))
            .unwrap();
        let mv = plan
            .iter()
            .position(|d| matches!(d, Dispatch::MoveExact { .. }))
            .unwrap();
        assert!(float < resize && resize < mv);
        assert_eq!(plan[1], Dispatch::Focus(h.clone()));
        assert_eq!(plan[2], Dispatch::ExitFullscreenFocused);
    }

    #[test]
    fn batch_plan_keeps_per_window_grouping() {
        let a = WindowHandle::from("0xa");
        let b = WindowHandle::from("0xb");
        let plan = batch_plan([
            (&a, Geometry::new(0, 0, 10, 10)),
            (&b, Geometry::new(20, 0, 10, 10)),
        ]);
        assert_eq!(plan.len(), 10);
        assert_eq!(plan[0], Dispatch::SetFloating(a));
        assert_eq!(plan[5], Dispatch::SetFloating(b));
    }

    #[test]
    fn empty_plan_for_no_windows() {
        assert!(batch_plan(std::iter::empty::<(&WindowHandle, Geometry)>()).is_empty());
    }
}
