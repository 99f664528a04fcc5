// File: crates/duet-core/tests/interaction.rs
// Purpose: Zoom state machine driven by pointer events, plus legend actions.

mod common;

use common::{dual_axis_chart, dual_axis_chart_with};
use duet_core::{
    resolve_domains, AxisId, ChartOptions, Domain, PointerEvent, RecordingSurface, Transition, ZoomMode, ZoomState,
    ZoomWindow,
};

fn mid_y(chart: &duet_core::Chart) -> f32 {
    let plot = chart.plot_rect();
    (plot.top + plot.bottom) * 0.5
}

#[test]
fn drag_past_threshold_zooms_x() {
    let mut chart = dual_axis_chart();
    let plot = chart.plot_rect();
    let xs = chart.x_scale();
    let y = mid_y(&chart);
    let (a, b) = (plot.left + 300.0, plot.left + 100.0);

    assert_eq!(chart.handle_event(PointerEvent::Down { x: a, y }), Transition::DragStarted);
    assert_eq!(chart.handle_event(PointerEvent::Move { x: b, y }), Transition::DragMoved);
    let Transition::Zoomed(window) = chart.handle_event(PointerEvent::Up { x: b, y }) else {
        panic!("expected a zoom");
    };
    assert_eq!(window.x, Domain::new(xs.from_px(b), xs.from_px(a)));
    assert_eq!(window.y_band, None);
    assert_eq!(chart.domains().x, window.x);
    assert_eq!(chart.zoom_state(), &ZoomState::ZoomedIn(window));
}

#[test]
fn short_drag_is_a_click() {
    let mut chart = dual_axis_chart();
    let global = chart.domains().clone();
    let plot = chart.plot_rect();
    let y = mid_y(&chart);
    chart.handle_event(PointerEvent::Down { x: plot.left + 50.0, y });
    let t = chart.handle_event(PointerEvent::Up { x: plot.left + 52.0, y });
    assert!(matches!(t, Transition::Click(_)));
    assert_eq!(chart.zoom_state(), &ZoomState::Idle);
    assert_eq!(chart.domains(), &global);
}

#[test]
fn click_while_zoomed_keeps_the_zoom() {
    let mut chart = dual_axis_chart();
    let plot = chart.plot_rect();
    let y = mid_y(&chart);
    chart.handle_event(PointerEvent::Down { x: plot.left + 10.0, y });
    let Transition::Zoomed(window) = chart.handle_event(PointerEvent::Up { x: plot.left + 400.0, y }) else {
        panic!("expected a zoom");
    };
    chart.handle_event(PointerEvent::Down { x: plot.left + 30.0, y });
    assert!(matches!(chart.handle_event(PointerEvent::Up { x: plot.left + 30.0, y }), Transition::Click(_)));
    assert_eq!(chart.zoom_state(), &ZoomState::ZoomedIn(window));
}

#[test]
fn second_drag_narrows_the_window() {
    let mut chart = dual_axis_chart();
    let plot = chart.plot_rect();
    let y = mid_y(&chart);
    chart.handle_event(PointerEvent::Down { x: plot.left + 100.0, y });
    let Transition::Zoomed(first) = chart.handle_event(PointerEvent::Up { x: plot.left + 500.0, y }) else {
        panic!("expected a zoom");
    };
    chart.handle_event(PointerEvent::Down { x: plot.left + 50.0, y });
    let Transition::Zoomed(second) = chart.handle_event(PointerEvent::Up { x: plot.left + 150.0, y }) else {
        panic!("expected a zoom");
    };
    assert!(second.x.min >= first.x.min && second.x.max <= first.x.max);
    assert!(second.x.span() < first.x.span());
}

#[test]
fn zoom_mode_none_ignores_drags() {
    let mut options = ChartOptions::default();
    options.zoom = ZoomMode::None;
    let mut chart = dual_axis_chart_with(options);
    let plot = chart.plot_rect();
    let y = mid_y(&chart);
    assert_eq!(chart.handle_event(PointerEvent::Down { x: plot.left + 10.0, y }), Transition::Unchanged);
    assert_eq!(chart.handle_event(PointerEvent::Up { x: plot.left + 400.0, y }), Transition::Unchanged);
    assert_eq!(chart.zoom_state(), &ZoomState::Idle);
}

#[test]
fn pointer_down_outside_plot_does_nothing() {
    let mut chart = dual_axis_chart();
    assert_eq!(chart.handle_event(PointerEvent::Down { x: 2.0, y: 2.0 }), Transition::Unchanged);
    assert_eq!(chart.zoom_state(), &ZoomState::Idle);
}

#[test]
fn double_click_resets_zoom() {
    let mut chart = dual_axis_chart();
    let global = chart.domains().clone();
    let plot = chart.plot_rect();
    let y = mid_y(&chart);
    chart.handle_event(PointerEvent::Down { x: plot.left + 20.0, y });
    chart.handle_event(PointerEvent::Up { x: plot.left + 220.0, y });
    assert_ne!(chart.domains(), &global);

    assert_eq!(chart.handle_event(PointerEvent::DoubleClick { x: plot.left + 20.0, y }), Transition::Reset);
    assert_eq!(chart.zoom_state(), &ZoomState::Idle);
    assert_eq!(chart.domains(), &global);
    assert_eq!(chart.handle_event(PointerEvent::Reset), Transition::Unchanged);
}

#[test]
fn leaving_mid_drag_cancels_it() {
    let mut chart = dual_axis_chart();
    let plot = chart.plot_rect();
    let y = mid_y(&chart);
    chart.handle_event(PointerEvent::Down { x: plot.left + 20.0, y });
    chart.handle_event(PointerEvent::Move { x: plot.left + 300.0, y });
    assert_eq!(chart.handle_event(PointerEvent::Leave), Transition::DragCancelled);
    assert_eq!(chart.zoom_state(), &ZoomState::Idle);
    assert_eq!(chart.handle_event(PointerEvent::Up { x: plot.left + 300.0, y }), Transition::Unchanged);
}

#[test]
fn y_zoom_narrows_each_axis_independently() {
    let mut options = ChartOptions::default();
    options.zoom = ZoomMode::Y;
    let mut chart = dual_axis_chart_with(options);
    let global = chart.domains().clone();
    let plot = chart.plot_rect();
    let x = plot.left + 200.0;
    let top = plot.top + plot.height() * 0.25;
    let bottom = plot.top + plot.height() * 0.75;

    chart.handle_event(PointerEvent::Down { x, y: top });
    let Transition::Zoomed(window) = chart.handle_event(PointerEvent::Up { x: x + 1.0, y: bottom }) else {
        panic!("expected a zoom");
    };
    let band = window.y_band.expect("y band");
    assert!((band.min - 0.25).abs() < 1e-6 && (band.max - 0.75).abs() < 1e-6);
    assert_eq!(chart.domains().x, global.x);
    for id in ["events", "percentage"] {
        let g = global.y(&AxisId::from(id)).unwrap();
        let z = chart.domains().y(&AxisId::from(id)).unwrap();
        assert!((z.min - g.lerp(0.25)).abs() < 1e-6 * g.span());
        assert!((z.max - g.lerp(0.75)).abs() < 1e-6 * g.span());
    }
}

#[test]
fn legend_reset_action_resets_zoom() {
    let mut options = ChartOptions::default();
    options.toggles.show_legend_actions = true;
    let mut chart = dual_axis_chart_with(options);
    chart.zoom_to(Domain::new(1600984800000.0, 1600990200000.0));
    let r = chart.legend().and_then(|l| l.reset).expect("reset action");
    let t = chart.handle_event(PointerEvent::Down { x: (r.left + r.right) * 0.5, y: (r.top + r.bottom) * 0.5 });
    assert_eq!(t, Transition::Reset);
    assert_eq!(chart.zoom_state(), &ZoomState::Idle);
}

#[test]
fn legend_item_click_toggles_visibility() {
    let mut chart = dual_axis_chart();
    let item = chart.legend().expect("legend").items[2].rect;
    let (x, y) = ((item.left + item.right) * 0.5, (item.top + item.bottom) * 0.5);
    chart.handle_event(PointerEvent::Down { x, y });
    assert!(!chart.series()[2].visible);
    chart.handle_event(PointerEvent::Down { x, y });
    assert!(chart.series()[2].visible);
}

#[test]
fn resize_keeps_zoom_domain() {
    let mut chart = dual_axis_chart();
    let window = Domain::new(1600984800000.0, 1600990200000.0);
    chart.zoom_to(window);
    chart.resize(640, 300);
    assert_eq!(chart.domains().x, window);
    assert_eq!(chart.width(), 640);
    assert!(chart.plot_rect().right < 640.0);
}

#[test]
fn drag_of_exactly_the_threshold_is_a_click() {
    let mut chart = dual_axis_chart();
    let threshold = chart.options().drag_threshold_px;
    let plot = chart.plot_rect();
    let y = mid_y(&chart);
    let x0 = plot.left + 50.0;

    chart.handle_event(PointerEvent::Down { x: x0, y });
    assert!(matches!(chart.handle_event(PointerEvent::Up { x: x0 + threshold, y }), Transition::Click(_)));
    assert_eq!(chart.zoom_state(), &ZoomState::Idle);

    chart.handle_event(PointerEvent::Down { x: x0, y });
    assert!(matches!(chart.handle_event(PointerEvent::Up { x: x0 + threshold + 1.0, y }), Transition::Zoomed(_)));
}

#[test]
fn resize_mid_drag_cancels_it() {
    let mut chart = dual_axis_chart();
    let plot = chart.plot_rect();
    let y = mid_y(&chart);
    chart.handle_event(PointerEvent::Down { x: plot.left + 20.0, y });
    chart.handle_event(PointerEvent::Move { x: plot.left + 300.0, y });
    chart.resize(640, 300);
    assert_eq!(chart.zoom_state(), &ZoomState::Idle);
    assert_eq!(chart.handle_event(PointerEvent::Up { x: plot.left + 300.0, y }), Transition::Unchanged);
    assert_eq!(chart.domains(), chart.global_domains());
}

#[test]
fn resize_mid_drag_keeps_an_earlier_zoom() {
    let mut chart = dual_axis_chart();
    let window = Domain::new(1600984800000.0, 1600999200000.0);
    chart.zoom_to(window);
    let plot = chart.plot_rect();
    let y = mid_y(&chart);
    chart.handle_event(PointerEvent::Down { x: plot.left + 20.0, y });
    chart.resize(800, 360);
    assert_eq!(chart.zoom_state(), &ZoomState::ZoomedIn(ZoomWindow::x_only(window)));
    assert_eq!(chart.domains().x, window);
}

#[test]
fn nested_xy_zoom_composes_the_band_per_axis() {
    let mut options = ChartOptions::default();
    options.zoom = ZoomMode::XY;
    let mut chart = dual_axis_chart_with(options);
    let plot = chart.plot_rect();
    let h = plot.height();

    chart.handle_event(PointerEvent::Down { x: plot.left + 100.0, y: plot.top + h * 0.25 });
    let Transition::Zoomed(first) =
        chart.handle_event(PointerEvent::Up { x: plot.left + 500.0, y: plot.top + h * 0.75 })
    else {
        panic!("expected a zoom");
    };
    let band = first.y_band.expect("y band");
    assert!((band.min - 0.25).abs() < 1e-6 && (band.max - 0.75).abs() < 1e-6);

    // lower half of the current view
    chart.handle_event(PointerEvent::Down { x: plot.left + 50.0, y: plot.top + h * 0.5 });
    let Transition::Zoomed(second) = chart.handle_event(PointerEvent::Up { x: plot.left + 150.0, y: plot.bottom })
    else {
        panic!("expected a zoom");
    };
    let band = second.y_band.expect("y band");
    assert!((band.min - 0.25).abs() < 1e-6 && (band.max - 0.5).abs() < 1e-6, "{band:?}");
    assert!(second.x.min >= first.x.min && second.x.max <= first.x.max);

    let fitted = resolve_domains(chart.series(), chart.axes(), Some(&ZoomWindow::x_only(second.x)));
    let mut zoomed = Vec::new();
    for id in ["events", "percentage"] {
        let id = AxisId::from(id);
        let f = fitted.y(&id).unwrap();
        let z = chart.domains().y(&id).unwrap();
        assert!((z.min - f.lerp(0.25)).abs() <= 1e-6 * f.span().max(1.0), "{id}: {z:?} vs {f:?}");
        assert!((z.max - f.lerp(0.5)).abs() <= 1e-6 * f.span().max(1.0), "{id}: {z:?} vs {f:?}");
        zoomed.push(z);
    }
    assert_ne!(zoomed[0], zoomed[1]);
    assert_eq!(chart.domains().x, second.x);

    let mut surface = RecordingSurface::new(chart.width(), chart.height());
    chart.render(&mut surface);
    assert!(matches!(surface.ops.first(), Some(duet_core::surface::DrawOp::Clear(_))));
}
