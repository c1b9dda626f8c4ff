use jiff::Span;
use payloads::{HouseRules, ProximityItem, SleepingItem, forms::VillaForm};
use reqwest::StatusCode;
use test_helpers::{
    assert_status_code, spawn_app, unknown_villa_id, villa_details_a,
};

#[tokio::test]
async fn create_read_update_delete_villa() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let villa = app.create_test_villa().await?;
    assert_eq!(villa.created_at, app.time_source.now());

    app.time_source.advance(Span::new().minutes(10));
    let updated = app.update_villa_details(villa.clone()).await?;
    assert_eq!(updated.updated_at, app.time_source.now());
    assert_eq!(updated.villa_details.amenities_detail, None);

    let villas = app.client.list_villas().await?;
    assert_eq!(villas.len(), 1);
    assert_eq!(villas[0].villa_details.name, "Villa Sawah Indah");

    app.client.delete_villa(&villa.villa_id).await?;
    assert!(
        app.client
            .get_villa(&villa.villa_id)
            .await
            .unwrap_err()
            .to_string()
            .contains("Villa not found")
    );
    assert!(app.client.list_villas().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn villas_are_listed_newest_first() -> anyhow::Result<()> {
    let app = spawn_app().await;

    for name in ["Villa Satu", "Villa Dua", "Villa Tiga"] {
        let details = payloads::Villa {
            name: name.into(),
            ..villa_details_a()
        };
        app.client.create_villa(&details).await?;
        app.time_source.advance(Span::new().hours(1));
    }

    let names: Vec<_> = app
        .client
        .list_villas()
        .await?
        .into_iter()
        .map(|v| v.villa_details.name)
        .collect();
    assert_eq!(names, vec!["Villa Tiga", "Villa Dua", "Villa Satu"]);

    Ok(())
}

#[tokio::test]
async fn nested_structures_are_normalized_on_write() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let mut amenities = payloads::AmenitiesDetail::new();
    amenities.insert("Family".into(), vec![]);
    amenities.insert("Kitchen".into(), vec!["Oven".into()]);
    let details = payloads::Villa {
        images: vec!["".into(), "https://images.example.com/a.jpg".into()],
        features: vec!["WiFi".into(), " WiFi ".into(), "AC".into()],
        amenities_detail: Some(amenities),
        proximity_list: Some(vec![ProximityItem {
            name: "   ".into(),
            distance: "5 min".into(),
        }]),
        sleeping_arrangements: Some(vec![
            SleepingItem::default(),
            SleepingItem {
                room: "Loft".into(),
                bed: "1 Sofa Bed".into(),
                view: String::new(),
            },
        ]),
        ..villa_details_a()
    };

    let villa_id = app.client.create_villa(&details).await?;
    let stored = app.client.get_villa(&villa_id).await?.villa_details;

    assert_eq!(stored.images, vec!["https://images.example.com/a.jpg"]);
    assert_eq!(stored.features, vec!["WiFi", "AC"]);
    let amenities = stored.amenities_detail.unwrap();
    assert!(!amenities.contains_key("Family"));
    assert_eq!(amenities["Kitchen"], vec!["Oven"]);
    assert_eq!(stored.proximity_list, None);
    assert_eq!(stored.sleeping_arrangements.unwrap().len(), 1);

    Ok(())
}

#[tokio::test]
async fn house_rules_are_always_stored() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let details = payloads::Villa {
        house_rules: HouseRules {
            smoking: true,
            max_guests: 10,
            ..HouseRules::default()
        },
        amenities_detail: None,
        proximity_list: None,
        sleeping_arrangements: None,
        ..villa_details_a()
    };

    let villa_id = app.client.create_villa(&details).await?;
    let stored = app.client.get_villa(&villa_id).await?.villa_details;
    assert_eq!(stored.house_rules, details.house_rules);
    assert_eq!(stored, details);

    Ok(())
}

#[tokio::test]
async fn villa_name_is_required() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let details = payloads::Villa {
        name: "  ".into(),
        ..villa_details_a()
    };
    assert_status_code(
        app.client.create_villa(&details).await,
        StatusCode::BAD_REQUEST,
    );

    let too_long = payloads::Villa {
        name: "x".repeat(256),
        ..villa_details_a()
    };
    assert_status_code(
        app.client.create_villa(&too_long).await,
        StatusCode::BAD_REQUEST,
    );

    Ok(())
}

#[tokio::test]
async fn typed_prices_are_stored_exactly() -> anyhow::Result<()> {
    let app = spawn_app().await;

    for typed in ["1000000000000000", "1250.555"] {
        let form = VillaForm {
            name: "Villa Harga".into(),
            price_per_night: typed.into(),
            ..VillaForm::default()
        };
        let villa_id = app.client.create_villa(&form.to_villa()).await?;
        let stored = app.client.get_villa(&villa_id).await?;
        assert_eq!(stored.villa_details.price_per_night, typed.parse::<rust_decimal::Decimal>()?);
    }

    Ok(())
}

#[tokio::test]
async fn missing_villas_are_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let villa_id = unknown_villa_id();

    assert_status_code(
        app.client.get_villa(&villa_id).await,
        StatusCode::NOT_FOUND,
    );
    assert_status_code(
        app.client.delete_villa(&villa_id).await,
        StatusCode::NOT_FOUND,
    );
    let update = payloads::requests::UpdateVilla {
        villa_id,
        villa_details: villa_details_a(),
    };
    assert_status_code(
        app.client.update_villa(&update).await,
        StatusCode::NOT_FOUND,
    );

    Ok(())
}
