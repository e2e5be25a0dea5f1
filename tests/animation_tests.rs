use approx::assert_relative_eq;
use dolly_zoom::camera::DollyZoom;
use dolly_zoom::core::clock::{progress, AnimationClock};

#[cfg(test)]
mod animation_tests {
    use super::*;

    #[test]
    fn test_progress_is_periodic() {
        for elapsed in [0.0_f64, 1.25, 3.5, 7.75, 9.0] {
            assert_relative_eq!(progress(elapsed, 10.0), progress(elapsed + 10.0, 10.0), epsilon = 1e-5);
            assert_relative_eq!(progress(elapsed, 10.0), progress(elapsed + 30.0, 10.0), epsilon = 1e-5);
        }
    }

    #[test]
    fn test_progress_stays_in_unit_range() {
        for i in 0..1000 {
            let p = progress(i as f64 * 0.037, 10.0);
            assert!((0.0..1.0).contains(&p), "progress {} out of range", p);
        }
    }

    #[test]
    fn test_animation_loops_after_days_of_uptime() {
        let dolly = DollyZoom::default();
        let week = 7.0 * 24.0 * 3600.0;
        let mut previous = dolly.at(progress(week, 10.0));

        for frame in 1..60 {
            let current = dolly.at(progress(week + frame as f64 / 60.0, 10.0));
            assert!(current.zoom < previous.zoom, "Zoom stalled at frame {}", frame);
            previous = current;
        }
    }

    #[test]
    fn test_zero_period_still_yields_unit_progress() {
        let clock = AnimationClock::new(0.0);
        for elapsed in [0.0, 3.0, 1e6] {
            assert!((0.0..1.0).contains(&clock.progress_at(elapsed)));
        }
    }

    #[test]
    fn test_clock_uses_configured_period() {
        let clock = AnimationClock::new(4.0);
        assert_eq!(clock.period(), 4.0);
        assert_relative_eq!(clock.progress_at(1.0), 0.25);
        assert_relative_eq!(clock.progress_at(5.0), 0.25);
    }

    #[test]
    fn test_dolly_closes_in_while_lens_narrows() {
        let dolly = DollyZoom::default();
        let mut previous = dolly.at(0.0);

        for i in 1..100 {
            let current = dolly.at(i as f32 / 100.0);
            assert!(current.zoom < previous.zoom);
            assert!(current.fov < previous.fov);
            previous = current;
        }
    }

    #[test]
    fn test_dolly_at_scenario_points() {
        let dolly = DollyZoom::default();

        let start = dolly.at(0.0);
        assert_eq!(start.zoom, 35.0);
        assert_eq!(start.fov, 60.0);

        let quarter = dolly.at(0.25);
        assert_relative_eq!(quarter.zoom, 28.75);
        assert_relative_eq!(quarter.fov, 56.25);

        let near_end = dolly.at(progress(9.999, 10.0));
        assert!(near_end.zoom > 10.0 && near_end.zoom < 10.01);
        assert!(near_end.fov > 45.0 && near_end.fov < 45.01);
    }

    #[test]
    fn test_animation_restarts_after_one_period() {
        let dolly = DollyZoom::default();
        assert_eq!(dolly.at(progress(10.0, 10.0)), dolly.at(0.0));
    }
}
