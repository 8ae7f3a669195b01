/// Arithmetic mean of a set of `(latitude, longitude)` pairs.
/// Returns `None` for an empty set.
pub fn centroid<I>(coords: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let (count, lat_sum, lng_sum) = coords
        .into_iter()
        .fold((0usize, 0.0, 0.0), |(n, lat, lng), (p_lat, p_lng)| {
            (n + 1, lat + p_lat, lng + p_lng)
        });

    if count == 0 {
        return None;
    }

    Some((lat_sum / count as f64, lng_sum / count as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centroid_sol_nascente() {
        // Two reports around Sol Nascente, Distrito Federal
        let points = [(-15.80, -48.10), (-15.82, -48.14)];

        let (lat, lng) = centroid(points).unwrap();
        assert!((lat - -15.81).abs() < 1e-9);
        assert!((lng - -48.12).abs() < 1e-9);
    }

    #[test]
    fn test_centroid_single_point() {
        assert_eq!(centroid([(1.0, 2.0)]), Some((1.0, 2.0)));
    }

    #[test]
    fn test_centroid_empty() {
        assert_eq!(centroid(std::iter::empty()), None);
    }
}
