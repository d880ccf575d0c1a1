// Mock data the store starts with
//
// Every seeded account uses the password "password".

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::domain::appointment::{Appointment, AppointmentStatus, Rating};
use crate::domain::barber::{BarberProfile, Coordinates, MediaKind, PortfolioItem, Service, Shop};
use crate::domain::user::{Email, Role, User};
use crate::store::StoreSnapshot;

pub const SEED_PASSWORD: &str = "password";

/// Builds the seed data set with appointment dates relative to `now`
pub fn seed_snapshot(now: DateTime<Utc>) -> StoreSnapshot {
    StoreSnapshot {
        users: seed_users(),
        barber_profiles: seed_profiles(),
        appointments: seed_appointments(now),
    }
}

fn user(id: &str, name: &str, email: &str, role: Role, is_banned: bool, is_approved: bool) -> User {
    User::from_parts(
        id,
        name,
        Email::from_persistence(email),
        SEED_PASSWORD,
        role,
        is_banned,
        is_approved,
    )
}

fn seed_users() -> Vec<User> {
    vec![
        user("admin1", "Admin", "admin@.com", Role::Admin, false, true),
        user("barber1", "Edward Scissorhands", "edward@barberbook.com", Role::Barber, false, true),
        user("barber2", "Sweeney Todd", "sweeney@barberbook.com", Role::Barber, false, true),
        user("barber3", "Pending Pete", "pete@barberbook.com", Role::Barber, false, false),
        user("client1", "John Doe", "john@email.com", Role::Client, false, true),
        user("client2", "Jane Smith", "jane@email.com", Role::Client, true, true),
    ]
}

fn image(id: &str, seed: &str, caption: &str) -> PortfolioItem {
    PortfolioItem {
        id: id.to_string(),
        kind: MediaKind::Image,
        url: format!("https://picsum.photos/seed/{}/400", seed),
        caption: Some(caption.to_string()),
    }
}

fn seed_profiles() -> Vec<BarberProfile> {
    vec![
        BarberProfile {
            user_id: "barber1".to_string(),
            bio: "Master of classic and modern styles. 15 years of experience creating sharp, \
                  stylish looks for discerning clients. I believe a good haircut is the best accessory."
                .to_string(),
            services: vec![
                Service::from_persistence("s1-1", "Classic Cut", Decimal::from(30), 30),
                Service::from_persistence("s1-2", "Beard Trim", Decimal::from(15), 15),
                Service::from_persistence("s1-3", "Hot Towel Shave", Decimal::from(40), 45),
            ],
            portfolio: vec![
                image("p1-1", "work1", "Clean fade"),
                image("p1-2", "work2", "Sharp beard trim"),
                image("p1-3", "workA", "Classic Pompadour"),
                image("p1-4", "workB", "Textured Crop"),
            ],
            profile_picture_url: "https://picsum.photos/seed/edward/400".to_string(),
            shop: Shop {
                name: "Edward's Edge".to_string(),
                address: "123 Main St, New York, NY".to_string(),
                location: Coordinates::new(40.7128, -74.0060),
            },
        },
        BarberProfile {
            user_id: "barber2".to_string(),
            bio: "Specializing in the closest shaves you've ever had. A true artist with a razor. \
                  Come for the shave, stay for the immaculate vibes."
                .to_string(),
            services: vec![
                Service::from_persistence("s2-1", "Modern Fade", Decimal::from(35), 40),
                Service::from_persistence("s2-2", "The Full Works", Decimal::from(60), 60),
            ],
            portfolio: vec![
                image("p2-1", "work3", "The closest shave"),
                image("p2-2", "workC", "Precision Line-up"),
            ],
            profile_picture_url: "https://picsum.photos/seed/sweeney/400".to_string(),
            shop: Shop {
                name: "Sweeney's Cuts".to_string(),
                address: "456 Fleet St, Los Angeles, CA".to_string(),
                location: Coordinates::new(34.0522, -118.2437),
            },
        },
        BarberProfile {
            user_id: "barber3".to_string(),
            bio: "Eager to start and show my skills!".to_string(),
            services: Vec::new(),
            portfolio: Vec::new(),
            profile_picture_url: "https://picsum.photos/seed/pete/400".to_string(),
            shop: Shop {
                name: "Pete's Place".to_string(),
                address: "789 Pending Ave, Chicago, IL".to_string(),
                location: Coordinates::new(41.8781, -87.6298),
            },
        },
    ]
}

fn completed(
    id: &str,
    barber_id: &str,
    service_id: &str,
    date: DateTime<Utc>,
    stars: u8,
    review: &str,
) -> Appointment {
    Appointment {
        id: id.to_string(),
        client_id: "client1".to_string(),
        barber_id: barber_id.to_string(),
        service_id: service_id.to_string(),
        date,
        status: AppointmentStatus::Completed,
        rating: Rating::new(stars).ok(),
        review: Some(review.to_string()),
    }
}

fn seed_appointments(now: DateTime<Utc>) -> Vec<Appointment> {
    vec![
        Appointment {
            id: "appt1".to_string(),
            client_id: "client1".to_string(),
            barber_id: "barber1".to_string(),
            service_id: "s1-1".to_string(),
            date: now + Duration::days(2),
            status: AppointmentStatus::Scheduled,
            rating: None,
            review: None,
        },
        completed(
            "appt2",
            "barber1",
            "s1-2",
            now - Duration::days(2),
            5,
            "Edward was amazing! Best haircut of my life.",
        ),
        completed(
            "appt3",
            "barber2",
            "s2-1",
            now - Duration::days(5),
            4,
            "Great shave, very precise.",
        ),
    ]
}
