//! Demo dataset loaded into the directory at startup.

use chrono::{Duration, Utc};

use shared::{
    AdvisorCreate, ClientCreate, QuoteCreate, QuoteStatus, QuoteType, VideoCallCategory,
    VideoCallCreate,
};

use super::Directory;

pub(super) fn populate(directory: &Directory) {
    let advisors = [
        AdvisorCreate {
            name: "Valeria Cruz".to_string(),
            email: "valeria@meridia.mx".to_string(),
            phone: Some("+52 999 555 0101".to_string()),
        },
        AdvisorCreate {
            name: "Diego Herrera".to_string(),
            email: "diego@meridia.mx".to_string(),
            phone: Some("+52 999 555 0102".to_string()),
        },
        AdvisorCreate {
            name: "Lucia Pech".to_string(),
            email: "lucia@meridia.mx".to_string(),
            phone: None,
        },
    ];

    let clients = [
        ClientCreate {
            name: "Jorge Medina".to_string(),
            email: "jorge.medina@example.com".to_string(),
            phone: "+52 999 123 4567".to_string(),
            reservation_number: Some("RSV-1042".to_string()),
        },
        ClientCreate {
            name: "Ana Sofia Torres".to_string(),
            email: "ana.torres@example.com".to_string(),
            phone: "+52 998 765 4321".to_string(),
            reservation_number: None,
        },
        ClientCreate {
            name: "Mark Reynolds".to_string(),
            email: "mark.reynolds@example.com".to_string(),
            phone: "+1 512 555 0188".to_string(),
            reservation_number: Some("RSV-1055".to_string()),
        },
    ];

    let mut advisor_ids = Vec::new();
    for advisor in advisors {
        if let Ok(created) = directory.add_advisor(advisor) {
            advisor_ids.push(created.id);
        }
    }

    let mut client_records = Vec::new();
    for client in clients {
        if let Ok(created) = directory.add_client(client) {
            client_records.push(created);
        }
    }

    // Seeding only proceeds when both sides exist; a partial seed is still
    // a usable directory.
    let (Some(advisor_id), Some(first_client), Some(second_client)) = (
        advisor_ids.first().cloned(),
        client_records.first().cloned(),
        client_records.get(1).cloned(),
    ) else {
        return;
    };

    let _ = directory.add_video_call(VideoCallCreate {
        client_id: first_client.id.clone(),
        client_name: first_client.name.clone(),
        category: VideoCallCategory::Honeymoon,
        scheduled_at: Utc::now() + Duration::days(2),
        notes: Some("Interesados en Riviera Maya".to_string()),
    });

    let _ = directory.add_video_call(VideoCallCreate {
        client_id: second_client.id.clone(),
        client_name: second_client.name.clone(),
        category: VideoCallCategory::GroupTrip,
        scheduled_at: Utc::now() + Duration::days(5),
        notes: None,
    });

    if let Ok(quote) = directory.add_quote(QuoteCreate {
        client_id: first_client.id,
        client_name: first_client.name,
        advisor_id: advisor_id.clone(),
        tour_id: None,
        tour_name: Some("Merida PLUS".to_string()),
        quote_type: QuoteType::HotelFlightTour,
        total_price: 48250.0,
        comments: "Traslados incluidos".to_string(),
    }) {
        let _ = directory.set_quote_status(&quote.id, QuoteStatus::Pending);
    }

    let _ = directory.add_quote(QuoteCreate {
        client_id: second_client.id,
        client_name: second_client.name,
        advisor_id,
        tour_id: None,
        tour_name: None,
        quote_type: QuoteType::HotelFlight,
        total_price: 21300.0,
        comments: String::new(),
    });
}
