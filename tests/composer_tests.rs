use approx::assert_relative_eq;
use dolly_zoom::config::SceneConfig;
use dolly_zoom::composer::FrameComposer;
use dolly_zoom::math::CubicBezier;
use glam::Vec3;

#[cfg(test)]
mod composer_tests {
    use super::*;

    fn composer() -> FrameComposer {
        FrameComposer::new(&SceneConfig::default())
    }

    #[test]
    fn test_car_nose_follows_road_tangent() {
        let curve = CubicBezier::road();
        for i in 0..10 {
            let t = i as f32 / 10.0;
            let pose = composer().compose(t);
            let nose = pose.car.transform_vector3(Vec3::Z).normalize();
            assert!(
                nose.abs_diff_eq(curve.tangent(t), 1e-4),
                "Car faces {:?} at t={} but road heads {:?}",
                nose,
                t,
                curve.tangent(t)
            );
        }
    }

    #[test]
    fn test_car_stays_upright() {
        for i in 0..10 {
            let pose = composer().compose(i as f32 / 10.0);
            let up = pose.car.transform_vector3(Vec3::Y).normalize();
            assert!(up.abs_diff_eq(Vec3::Y, 1e-4));
        }
    }

    #[test]
    fn test_camera_looks_at_car_from_behind() {
        let curve = CubicBezier::road();
        for i in 0..10 {
            let t = i as f32 / 10.0;
            let pose = composer().compose(t);
            let car = curve.position(t);

            assert_eq!(pose.camera.target, car);
            assert_relative_eq!(pose.camera.position.y, 5.0, epsilon = 1e-4);

            let behind = (car - pose.camera.position).dot(curve.tangent(t));
            assert_relative_eq!(behind, pose.dolly.zoom, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_camera_distance_shrinks_over_the_loop() {
        let start = composer().compose(0.0);
        let end = composer().compose(0.99);
        let start_distance = (start.camera.target - start.camera.position).length();
        let end_distance = (end.camera.target - end.camera.position).length();

        assert!(end_distance < start_distance);
        assert!(end.camera.fov < start.camera.fov);
    }

    #[test]
    fn test_view_projection_keeps_car_on_screen() {
        let config = SceneConfig::default();
        let aspect = config.window.aspect();

        for i in 0..10 {
            let pose = composer().compose(i as f32 / 10.0);
            let clip = pose.camera.view_projection(aspect) * pose.camera.target.extend(1.0);
            let ndc = clip.truncate() / clip.w;

            assert!(clip.w > 0.0);
            assert!(ndc.x.abs() < 1e-3 && ndc.y.abs() < 1e-3);
            assert!((0.0..1.0).contains(&ndc.z));
        }
    }
}
