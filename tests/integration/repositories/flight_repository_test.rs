// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::create_test_db;
use flightdesk::domain::models::flight::FlightFields;
use flightdesk::domain::models::itinerary::ItineraryFields;
use flightdesk::domain::repositories::flight_repository::FlightRepository;
use flightdesk::domain::repositories::itinerary_repository::ItineraryRepository;
use flightdesk::domain::repositories::RepositoryError;
use flightdesk::infrastructure::repositories::flight_repo_impl::FlightRepositoryImpl;
use flightdesk::infrastructure::repositories::itinerary_repo_impl::ItineraryRepositoryImpl;

fn itinerary() -> ItineraryFields {
    ItineraryFields {
        departure_city: "New York".to_string(),
        arrival_city: "London".to_string(),
        date_departure: "2024-11-15".to_string(),
        time_departure: "08:00:00".to_string(),
    }
}

fn flight(itinerary_id: i32) -> FlightFields {
    FlightFields {
        departure_city: "New York".to_string(),
        arrival_city: "Reykjavik".to_string(),
        date_departure: "2024-11-15".to_string(),
        date_arrival: "2024-11-15".to_string(),
        itinerary_id,
    }
}

#[tokio::test]
async fn test_find_flights_by_itinerary() {
    let db = create_test_db().await;
    let itineraries = ItineraryRepositoryImpl::new(db.clone());
    let flights = FlightRepositoryImpl::new(db);

    let a = itineraries.create(&itinerary()).await.unwrap().id;
    let b = itineraries.create(&itinerary()).await.unwrap().id;
    flights.create(&flight(a)).await.unwrap();
    flights.create(&flight(b)).await.unwrap();
    flights.create(&flight(a)).await.unwrap();

    let of_a = flights.find_by_itinerary(a).await.unwrap();
    assert_eq!(of_a.len(), 2);
    assert!(of_a.iter().all(|f| f.itinerary_id == a));
    assert_eq!(flights.find_all().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_flight_requires_existing_itinerary() {
    let flights = FlightRepositoryImpl::new(create_test_db().await);

    let result = flights.create(&flight(404)).await;

    assert!(matches!(result, Err(RepositoryError::Database(_))));
}

#[tokio::test]
async fn test_itinerary_delete_removes_its_flights() {
    let db = create_test_db().await;
    let itineraries = ItineraryRepositoryImpl::new(db.clone());
    let flights = FlightRepositoryImpl::new(db);

    let id = itineraries.create(&itinerary()).await.unwrap().id;
    for _ in 0..4 {
        flights.create(&flight(id)).await.unwrap();
    }

    itineraries.delete(id).await.unwrap();

    assert!(flights.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_and_delete_flight() {
    let db = create_test_db().await;
    let itineraries = ItineraryRepositoryImpl::new(db.clone());
    let flights = FlightRepositoryImpl::new(db);

    let id = itineraries.create(&itinerary()).await.unwrap().id;
    let created = flights.create(&flight(id)).await.unwrap();

    let mut changed = flight(id);
    changed.date_arrival = "2024-11-16".to_string();
    let updated = flights.update(created.id, &changed).await.unwrap();
    assert_eq!(updated.date_arrival, "2024-11-16");

    flights.delete(created.id).await.unwrap();
    assert!(matches!(
        flights.delete(created.id).await,
        Err(RepositoryError::NotFound)
    ));
}
