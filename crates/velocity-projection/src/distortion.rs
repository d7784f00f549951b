//! Wind-vector distortion under the view projection.
//!
//! A raw (u, v) wind vector points true east/north. Drawn directly on the
//! canvas it would point the wrong way and stretch the wrong amount,
//! because the projection warps both axes differently at every latitude.
//! The fix is a local linear approximation of the warp, sampled by
//! symmetric finite differences around the point, applied to the vector
//! before it is advected.

use nalgebra::{Matrix2, Vector2};

use velocity_common::WindVector;

use crate::mercator::MercatorProjection;

impl MercatorProjection {
    /// Local distortion tensor at a point.
    ///
    /// `(lon, lat)` is the geographic position in degrees and `(x, y)` its
    /// canvas pixel, as previously produced by
    /// [`geo_to_canvas`](Self::geo_to_canvas) or
    /// [`canvas_to_geo`](Self::canvas_to_geo).
    ///
    /// The returned matrix maps a scaled (u, v) vector to canvas space:
    /// column 0 is the response to a unit eastward step, column 1 to a
    /// unit northward step. Its column-major flattening is the
    /// `[d0, d1, d2, d3]` layout used by the canvas animation code.
    pub fn distortion(&self, lon: f64, lat: f64, x: f64, y: f64) -> Matrix2<f64> {
        let h = 10.0_f64.powf(-5.2);
        // Step toward the quadrant the point sits in, so the probe never
        // crosses 0 and flips sign on the reference point.
        let h_lon = if lon < 0.0 { h } else { -h };
        let h_lat = if lat < 0.0 { h } else { -h };

        // The probe calls transpose the projection arguments on purpose.
        // The orientation of the returned tensor depends on this exact
        // sampling order; keep it in sync with the column layout below.
        let (p_lon_x, p_lon_y) = self.geo_to_canvas(lat, lon + h_lon);
        let (p_lat_x, p_lat_y) = self.geo_to_canvas(lat + h_lat, lon);

        // Meridian scale factor (Snyder, eq. 4-3, R = 1): the apparent
        // length of one degree of longitude shrinks with cos(φ). Without
        // it the field pinches at the poles.
        let k = lat.to_radians().cos();

        Matrix2::new(
            (p_lon_x - x) / h_lon / k,
            (p_lat_x - x) / h_lat,
            (p_lon_y - y) / h_lon / k,
            (p_lat_y - y) / h_lat,
        )
    }

    /// Correct a wind vector for the projection warp at its sample point.
    ///
    /// Scales the components by `scale`, then applies the distortion
    /// tensor. Returns the corrected vector rather than mutating the
    /// argument, so a sample can fan out to several particles. Garbage in
    /// (non-finite coordinates, zero spans) propagates as garbage out, to
    /// be filtered by the caller.
    pub fn distort(
        &self,
        lon: f64,
        lat: f64,
        x: f64,
        y: f64,
        scale: f64,
        wind: WindVector,
    ) -> WindVector {
        let d = self.distortion(lon, lat, x, y);
        let corrected = d * Vector2::new(wind.u * scale, wind.v * scale);
        WindVector::new(corrected.x, corrected.y)
    }
}

#[cfg(test)]
mod tests {
    use velocity_common::{GeoBounds, Viewport, WindVector};

    use crate::mercator::MercatorProjection;

    fn world_view() -> MercatorProjection {
        MercatorProjection::new(
            GeoBounds::new(85.0, -85.0, 180.0, -180.0),
            Viewport::sized(1024.0, 512.0),
        )
    }

    /// The tensor entries recomputed from first principles with the public
    /// forward projection, in the flattened [d0, d1, d2, d3] layout.
    fn reference_tensor(
        proj: &MercatorProjection,
        lon: f64,
        lat: f64,
        x: f64,
        y: f64,
    ) -> [f64; 4] {
        let h = 10.0_f64.powf(-5.2);
        let h_lon = if lon < 0.0 { h } else { -h };
        let h_lat = if lat < 0.0 { h } else { -h };
        let p_lon = proj.geo_to_canvas(lat, lon + h_lon);
        let p_lat = proj.geo_to_canvas(lat + h_lat, lon);
        let k = lat.to_radians().cos();
        [
            (p_lon.0 - x) / h_lon / k,
            (p_lon.1 - y) / h_lon / k,
            (p_lat.0 - x) / h_lat,
            (p_lat.1 - y) / h_lat,
        ]
    }

    #[test]
    fn test_tensor_matches_reference_finite_difference() {
        let proj = world_view();
        for (lon, lat) in [(10.0, 0.0), (-10.0, 0.0), (60.0, 55.0), (-60.0, -40.0)] {
            let (x, y) = proj.geo_to_canvas(lon, lat);
            let d = proj.distortion(lon, lat, x, y);
            let expected = reference_tensor(&proj, lon, lat, x, y);
            for (got, want) in d.as_slice().iter().zip(expected.iter()) {
                let rel = (got - want).abs() / want.abs().max(1.0);
                assert!(
                    rel < 1e-12,
                    "tensor entry at ({}, {}): got {}, want {}",
                    lon,
                    lat,
                    got,
                    want
                );
            }
        }
    }

    #[test]
    fn test_equator_has_unit_meridian_factor() {
        // At φ = 0 the cos(φ) factor is exactly 1, so the λ-probe entries
        // are the plain finite-difference ratios with no extra scaling.
        let proj = world_view();
        let (lon, lat) = (10.0, 0.0);
        let (x, y) = proj.geo_to_canvas(lon, lat);

        let h = 10.0_f64.powf(-5.2);
        let h_lon = -h; // lon >= 0 steps west
        let p_lon = proj.geo_to_canvas(lat, lon + h_lon);
        let plain_dx = (p_lon.0 - x) / h_lon;
        let plain_dy = (p_lon.1 - y) / h_lon;

        let d = proj.distortion(lon, lat, x, y);
        assert!(
            (d[(0, 0)] - plain_dx).abs() <= plain_dx.abs() * 1e-12,
            "d0 scaled at the equator: {} vs {}",
            d[(0, 0)],
            plain_dx
        );
        assert!(
            (d[(1, 0)] - plain_dy).abs() <= plain_dy.abs() * 1e-12,
            "d1 scaled at the equator: {} vs {}",
            d[(1, 0)],
            plain_dy
        );
    }

    #[test]
    fn test_probe_step_sign_follows_hemisphere() {
        // The probes stay inside the hemisphere of the reference point, so
        // the tensor is finite and well-defined right next to 0°.
        let proj = world_view();
        for (lon, lat) in [(0.001, 0.001), (-0.001, -0.001), (0.0, 0.0)] {
            let (x, y) = proj.geo_to_canvas(lon, lat);
            let d = proj.distortion(lon, lat, x, y);
            assert!(
                d.iter().all(|e| e.is_finite()),
                "tensor not finite at ({}, {}): {:?}",
                lon,
                lat,
                d
            );
        }
    }

    #[test]
    fn test_tensor_degenerates_past_ninety_degrees_longitude() {
        // The transposed probes put the longitude in the Mercator latitude
        // slot, so past ±90° the second tensor row is non-finite. The
        // samplers' finiteness filter drops those points.
        let proj = world_view();
        let (lon, lat) = (120.0, 10.0);
        let (x, y) = proj.geo_to_canvas(lon, lat);

        let d = proj.distortion(lon, lat, x, y);
        assert!(d[(0, 0)].is_finite());
        assert!(!d[(1, 0)].is_finite() || !d[(1, 1)].is_finite());

        let w = proj.distort(lon, lat, x, y, 1.0, WindVector::new(1.0, 1.0));
        assert!(!w.is_finite());
    }

    #[test]
    fn test_distort_zero_scale_yields_zero_vector() {
        let proj = world_view();
        for (lon, lat) in [(0.0, 0.0), (45.0, 45.0), (-45.0, -20.0)] {
            let (x, y) = proj.geo_to_canvas(lon, lat);
            let out = proj.distort(lon, lat, x, y, 0.0, WindVector::new(12.5, -7.0));
            assert_eq!(out, WindVector::zero(), "at ({}, {})", lon, lat);
        }
    }

    #[test]
    fn test_distort_applies_tensor_columns() {
        let proj = world_view();
        let (lon, lat) = (25.0, 48.0);
        let (x, y) = proj.geo_to_canvas(lon, lat);
        let d = proj.distortion(lon, lat, x, y);

        // A unit eastward vector picks out column 0, northward column 1.
        let east = proj.distort(lon, lat, x, y, 1.0, WindVector::new(1.0, 0.0));
        assert_eq!(east, WindVector::new(d[(0, 0)], d[(1, 0)]));
        let north = proj.distort(lon, lat, x, y, 1.0, WindVector::new(0.0, 1.0));
        assert_eq!(north, WindVector::new(d[(0, 1)], d[(1, 1)]));
    }

    #[test]
    fn test_distort_is_linear_in_the_wind() {
        let proj = world_view();
        let (lon, lat) = (-40.0, 30.0);
        let (x, y) = proj.geo_to_canvas(lon, lat);

        let a = proj.distort(lon, lat, x, y, 1.0, WindVector::new(3.0, 0.0));
        let b = proj.distort(lon, lat, x, y, 1.0, WindVector::new(0.0, -2.0));
        let both = proj.distort(lon, lat, x, y, 1.0, WindVector::new(3.0, -2.0));

        let tol = both.speed().max(1.0) * 1e-9;
        assert!((both.u - (a.u + b.u)).abs() < tol);
        assert!((both.v - (a.v + b.v)).abs() < tol);
    }
}
