//! Realistic villa and blog data for development and tests
//!
//! Used by the dev-server to give the admin UI something to show:
//! - Three villas around Ubud with varying amounts of nested detail
//! - Blog posts in several categories, published and drafts
//! - Bookings in every status, some in progress today
//! - A couple of experiences
//!
//! Records are created a few minutes apart so list ordering is visible.

use crate::{BookingSeed, TestApp};
use anyhow::Result;
use jiff::{Span, Timestamp, ToSpan};
use payloads::{
    BlogCategory, BookingStatus, HouseRules, ProximityItem, SleepingItem,
    responses,
};
use rust_decimal::dec;

pub struct DevDataset {
    pub villas: Vec<responses::Villa>,
    pub blog_posts: Vec<responses::BlogPost>,
    pub booking_count: usize,
    pub experience_count: usize,
}

impl DevDataset {
    pub async fn create(app: &TestApp) -> Result<Self> {
        // records are stepped forward from here, ending before real time
        app.time_source.set(Timestamp::now() - Span::new().hours(2));

        tracing::info!("🏡 Creating villas");
        let mut villas = Vec::new();
        for details in [villa_sawah(), villa_bambu(), villa_kecil()] {
            let villa_id = app.client.create_villa(&details).await?;
            villas.push(app.client.get_villa(&villa_id).await?);
            step(app);
        }

        tracing::info!("📝 Creating blog posts");
        let mut blog_posts = Vec::new();
        for details in blog_posts_details() {
            blog_posts.push(app.create_blog_post(&details).await?);
            step(app);
        }

        tracing::info!("📅 Creating bookings");
        let today = app.time_source.today();
        let bookings = [
            (0, -2, 3, BookingStatus::Confirmed, "Made Sutrisno"),
            (1, -1, 1, BookingStatus::Confirmed, "Ana Lima"),
            (0, 10, 14, BookingStatus::Pending, "Jonas Berg"),
            (2, -20, -15, BookingStatus::Completed, "Priya Nair"),
            (1, 5, 8, BookingStatus::Cancelled, "Tom Reed"),
        ];
        for (villa_idx, start, end, status, guest) in bookings {
            let villa: &responses::Villa = &villas[villa_idx];
            let nights = end - start;
            let seed = BookingSeed {
                start_date: today.checked_add(start.days())?,
                end_date: today.checked_add(end.days())?,
                total_price: villa.villa_details.price_per_night
                    * rust_decimal::Decimal::from(nights),
                status,
                guest_name: guest.into(),
                special_request: (status == BookingStatus::Confirmed)
                    .then(|| "Airport pickup at 14:00".to_string()),
            };
            app.insert_booking(&villa.villa_id, &seed).await?;
            step(app);
        }

        tracing::info!("🌿 Creating experiences");
        let experiences = [
            ("Sunrise trek on Mount Batur", "Start at 2am, coffee at the top."),
            ("Balinese cooking class", "Market visit and six dishes."),
        ];
        for (title, description) in experiences {
            app.insert_experience(title, description).await?;
            step(app);
        }

        tracing::info!("✅ Development dataset created");

        Ok(DevDataset {
            villas,
            blog_posts,
            booking_count: bookings.len(),
            experience_count: experiences.len(),
        })
    }

    /// Print a summary of the created test data
    pub fn print_summary(&self) {
        tracing::info!("📋 Available test data:");
        tracing::info!("   🏡 Villas:");
        for villa in &self.villas {
            tracing::info!(
                "      - {} ({})",
                villa.villa_details.name,
                villa.villa_id
            );
        }
        tracing::info!("   📝 Blog posts:");
        for post in &self.blog_posts {
            tracing::info!(
                "      - {} [{}]{}",
                post.post_details.title,
                post.post_details.category,
                if post.is_published() { "" } else { " (draft)" }
            );
        }
        tracing::info!("   📅 {} bookings", self.booking_count);
        tracing::info!("   🌿 {} experiences", self.experience_count);
    }
}

fn step(app: &TestApp) {
    app.time_source.advance(Span::new().minutes(5));
}

fn villa_sawah() -> payloads::Villa {
    crate::villa_details_a()
}

fn villa_bambu() -> payloads::Villa {
    let mut amenities = payloads::AmenitiesDetail::new();
    amenities.insert(
        "Bathroom".into(),
        vec!["Outdoor shower".into(), "Stone bathtub".into()],
    );
    amenities.insert("Wellness".into(), vec!["Yoga shala".into()]);

    payloads::Villa {
        name: "Villa Bambu".into(),
        description: "Bamboo house on the Ayung river gorge.".into(),
        price_per_night: dec!(2750000),
        bedrooms: 2,
        guests: 4,
        bathrooms: 2,
        levels: 3,
        pantry: 1,
        land_area: 420.0,
        building_area: 190.0,
        pool_area: 0.0,
        latitude: -8.5028,
        longitude: 115.2522,
        image_url: "https://images.example.com/bambu/main.jpg".into(),
        images: vec!["https://images.example.com/bambu/1.jpg".into()],
        features: vec![
            "Jungle View".into(),
            "Yoga Deck".into(),
            "WiFi".into(),
        ],
        house_rules: HouseRules {
            check_in: "15:00".into(),
            quiet_hours: "21:00 - 07:00".into(),
            max_guests: 4,
            ..HouseRules::default()
        },
        amenities_detail: Some(amenities),
        proximity_list: Some(vec![
            ProximityItem {
                name: "Campuhan Ridge Walk".into(),
                distance: "5 min walk".into(),
            },
            ProximityItem {
                name: "Ubud Monkey Forest".into(),
                distance: "10 min drive".into(),
            },
        ]),
        sleeping_arrangements: Some(vec![
            SleepingItem {
                room: "Treetop Room".into(),
                bed: "1 Queen Bed".into(),
                view: "River gorge".into(),
            },
            SleepingItem {
                room: "Garden Room".into(),
                bed: "2 Twin Beds".into(),
                view: "Garden".into(),
            },
        ]),
    }
}

/// A villa entered with only the basics.
fn villa_kecil() -> payloads::Villa {
    payloads::Villa {
        name: "Villa Kecil".into(),
        description: String::new(),
        price_per_night: dec!(950000),
        bedrooms: 1,
        guests: 2,
        bathrooms: 1,
        levels: 1,
        pantry: 0,
        land_area: 0.0,
        building_area: 0.0,
        pool_area: 0.0,
        latitude: -8.5186,
        longitude: 115.2588,
        image_url: String::new(),
        images: Vec::new(),
        features: Vec::new(),
        house_rules: HouseRules::default(),
        amenities_detail: None,
        proximity_list: None,
        sleeping_arrangements: None,
    }
}

fn blog_posts_details() -> Vec<payloads::BlogPost> {
    vec![
        crate::blog_post_a(),
        crate::blog_post_b(),
        payloads::BlogPost {
            title: "Melukat: A Water Purification Guide".into(),
            slug: "melukat-a-water-purification-guide".into(),
            excerpt: "What to wear and what to bring to Tirta Empul.".into(),
            content: "Bring a sarong.\n\n- Offerings are sold at the gate\n\
                      - Start at the leftmost spout"
                .into(),
            category: BlogCategory::Culture,
            author: "Admin".into(),
            image_url: None,
            is_published: true,
        },
        payloads::BlogPost {
            title: "Designing with Alang-Alang".into(),
            slug: "designing-with-alang-alang".into(),
            excerpt: String::new(),
            content: String::new(),
            category: BlogCategory::Design,
            author: "Admin".into(),
            image_url: None,
            is_published: false,
        },
    ]
}
