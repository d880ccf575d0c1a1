use serde::Serialize;

use crate::domain::appointment::Appointment;

/// Average stars and number of ratings for one barber
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RatingSummary {
    /// Arithmetic mean of the counted ratings, exactly 0 when there are none
    pub average: f64,
    pub count: usize,
}

/// Aggregates the ratings of a barber's completed, rated appointments
///
/// Scheduled and cancelled visits are ignored even if a rating was attached.
///
/// # Example
/// ```
/// use barberbook_core::ranking::aggregate_rating;
///
/// let summary = aggregate_rating(&[], "barber1");
/// assert_eq!(summary.count, 0);
/// assert_eq!(summary.average, 0.0);
/// ```
pub fn aggregate_rating(appointments: &[Appointment], barber_id: &str) -> RatingSummary {
    let (total, count) = appointments
        .iter()
        .filter(|a| a.barber_id == barber_id && a.counts_toward_rating())
        .filter_map(|a| a.rating)
        .fold((0u32, 0usize), |(total, count), rating| {
            (total + u32::from(rating.stars()), count + 1)
        });

    if count == 0 {
        return RatingSummary::default();
    }

    RatingSummary {
        average: f64::from(total) / count as f64,
        count,
    }
}
