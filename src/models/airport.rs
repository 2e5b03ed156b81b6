use serde::{Deserialize, Serialize};

/// Airport record as served by `GET /airports`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airport {
    pub name: String,
    pub city: String,
    pub iata: String,
    pub image_url: String,
}

impl Airport {
    pub fn new(name: &str, city: &str, iata: &str, image_url: &str) -> Self {
        Self {
            name: name.to_string(),
            city: city.to_string(),
            iata: iata.to_string(),
            image_url: image_url.to_string(),
        }
    }
}

/// Extended record served by `GET /airports_v2`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirportV2 {
    #[serde(flatten)]
    pub airport: Airport,
    /// Runway length in metres
    pub runway_length: u32,
}

/// Response for a successful image update
#[derive(Debug, Serialize)]
pub struct UpdateImageResponse {
    pub message: String,
    pub image_url: String,
}

impl UpdateImageResponse {
    pub fn new(image_url: String) -> Self {
        Self {
            message: "Image updated successfully".to_string(),
            image_url,
        }
    }
}

/// Records loaded at startup, in listing order
pub fn seed() -> Vec<AirportV2> {
    vec![
        AirportV2 {
            airport: Airport::new(
                "Hazrat Shahjalal International Airport",
                "Dhaka",
                "DAC",
                "https://storage.googleapis.com/bd-airport-data/dac.jpg",
            ),
            runway_length: 3200,
        },
        AirportV2 {
            airport: Airport::new(
                "Shah Amanat International Airport",
                "Chittagong",
                "CGP",
                "https://storage.googleapis.com/bd-airport-data/cgp.jpg",
            ),
            runway_length: 2900,
        },
        AirportV2 {
            airport: Airport::new(
                "Osmani International Airport",
                "Sylhet",
                "ZYL",
                "https://storage.googleapis.com/bd-airport-data/zyl.jpg",
            ),
            runway_length: 2500,
        },
    ]
}
