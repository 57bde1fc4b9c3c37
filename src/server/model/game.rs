//! Game domain models, parameters and play-area validation.
//!
//! A game is a play area (centre coordinates plus size) with a time window. The
//! validation helpers here are shared with bombs, which use the same coordinate ranges.

use chrono::{DateTime, Duration, Months, Utc};
use uuid::Uuid;

use crate::{
    model::game::{CreateGameDto, GameDto, UpdateGameDto},
    server::{error::AppError, model::team::Team},
};

pub const LATITUDE_ERROR: &str = "latitude must be between -90/90";
pub const LONGITUDE_ERROR: &str = "longitude must be between -180/180";
pub const SIZE_ERROR: &str = "size must be between 50/10107";
pub const ENDING_DATE_ERROR: &str = "ending_date must be between 1 day and 1 month from now";

const MIN_SIZE: f64 = 50.0;
const MAX_SIZE: f64 = 10107.0;

/// Game with its play area, time window and participating teams.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: Uuid,
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub size: f64,
    pub starting_date: DateTime<Utc>,
    pub ending_date: DateTime<Utc>,
    pub teams: Vec<Team>,
}

impl Game {
    /// Converts the game domain model to a DTO for API responses.
    pub fn into_dto(self) -> GameDto {
        GameDto {
            id_game: self.id,
            center_latitude: self.center_latitude,
            center_longitude: self.center_longitude,
            size: self.size,
            starting_date: self.starting_date,
            ending_date: self.ending_date,
            teams: self.teams.into_iter().map(Team::into_dto).collect(),
        }
    }

    /// Converts an entity model and its loaded teams to a domain model.
    ///
    /// # Arguments
    /// - `entity` - The game entity from the database
    /// - `teams` - Team entities belonging to the game
    ///
    /// # Returns
    /// - `Game` - The converted domain model
    pub fn from_entity(entity: entity::game::Model, teams: Vec<entity::team::Model>) -> Self {
        Self {
            id: entity.id,
            center_latitude: entity.center_latitude,
            center_longitude: entity.center_longitude,
            size: entity.size,
            starting_date: entity.starting_date,
            ending_date: entity.ending_date,
            teams: teams.into_iter().map(Team::from_entity).collect(),
        }
    }
}

/// Fully validated values for inserting a game.
#[derive(Debug, Clone)]
pub struct CreateGameParams {
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub size: f64,
    pub starting_date: DateTime<Utc>,
    pub ending_date: DateTime<Utc>,
}

impl CreateGameParams {
    /// Checks a creation payload and converts it to insert parameters.
    ///
    /// All missing fields are reported in a single error before any range check runs.
    ///
    /// # Arguments
    /// - `dto` - Creation payload from the client
    /// - `now` - Reference instant for the ending date window
    ///
    /// # Returns
    /// - `Ok(CreateGameParams)` - Payload complete and within range
    /// - `Err(AppError::BadRequest)` - Missing fields or out of range values
    pub fn from_dto(dto: CreateGameDto, now: DateTime<Utc>) -> Result<Self, AppError> {
        let mut missing = Vec::new();
        if dto.center_latitude.is_none() {
            missing.push("center_latitude");
        }
        if dto.center_longitude.is_none() {
            missing.push("center_longitude");
        }
        if dto.size.is_none() {
            missing.push("size");
        }
        if dto.starting_date.is_none() {
            missing.push("starting_date");
        }
        if dto.ending_date.is_none() {
            missing.push("ending_date");
        }

        let (
            Some(center_latitude),
            Some(center_longitude),
            Some(size),
            Some(starting_date),
            Some(ending_date),
        ) = (
            dto.center_latitude,
            dto.center_longitude,
            dto.size,
            dto.starting_date,
            dto.ending_date,
        )
        else {
            return Err(AppError::BadRequest(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        };

        validate_latitude(center_latitude)?;
        validate_longitude(center_longitude)?;
        validate_size(size)?;
        validate_ending_date(ending_date, now)?;

        Ok(Self {
            center_latitude,
            center_longitude,
            size,
            starting_date,
            ending_date,
        })
    }
}

/// Validated partial update of a game. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateGameParams {
    pub center_latitude: Option<f64>,
    pub center_longitude: Option<f64>,
    pub size: Option<f64>,
    pub starting_date: Option<DateTime<Utc>>,
    pub ending_date: Option<DateTime<Utc>>,
}

impl UpdateGameParams {
    /// Checks an update payload, validating only the supplied fields.
    ///
    /// # Arguments
    /// - `dto` - Update payload from the client
    /// - `now` - Reference instant for the ending date window
    ///
    /// # Returns
    /// - `Ok(UpdateGameParams)` - At least one field supplied and all supplied fields valid
    /// - `Err(AppError::BadRequest)` - Empty payload or out of range values
    pub fn from_dto(dto: UpdateGameDto, now: DateTime<Utc>) -> Result<Self, AppError> {
        if dto.center_latitude.is_none()
            && dto.center_longitude.is_none()
            && dto.size.is_none()
            && dto.starting_date.is_none()
            && dto.ending_date.is_none()
        {
            return Err(AppError::BadRequest(
                "At least one field must be provided".to_string(),
            ));
        }

        if let Some(latitude) = dto.center_latitude {
            validate_latitude(latitude)?;
        }
        if let Some(longitude) = dto.center_longitude {
            validate_longitude(longitude)?;
        }
        if let Some(size) = dto.size {
            validate_size(size)?;
        }
        if let Some(ending_date) = dto.ending_date {
            validate_ending_date(ending_date, now)?;
        }

        Ok(Self {
            center_latitude: dto.center_latitude,
            center_longitude: dto.center_longitude,
            size: dto.size,
            starting_date: dto.starting_date,
            ending_date: dto.ending_date,
        })
    }
}

pub fn validate_latitude(latitude: f64) -> Result<(), AppError> {
    if (-90.0..=90.0).contains(&latitude) {
        Ok(())
    } else {
        Err(AppError::BadRequest(LATITUDE_ERROR.to_string()))
    }
}

pub fn validate_longitude(longitude: f64) -> Result<(), AppError> {
    if (-180.0..=180.0).contains(&longitude) {
        Ok(())
    } else {
        Err(AppError::BadRequest(LONGITUDE_ERROR.to_string()))
    }
}

pub fn validate_size(size: f64) -> Result<(), AppError> {
    if (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(AppError::BadRequest(SIZE_ERROR.to_string()))
    }
}

/// Ending date must fall between one day and one calendar month after `now`.
pub fn validate_ending_date(ending_date: DateTime<Utc>, now: DateTime<Utc>) -> Result<(), AppError> {
    let earliest = now + Duration::days(1);
    let latest = now
        .checked_add_months(Months::new(1))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);

    if ending_date >= earliest && ending_date <= latest {
        Ok(())
    } else {
        Err(AppError::BadRequest(ENDING_DATE_ERROR.to_string()))
    }
}
