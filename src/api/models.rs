use serde::{Deserialize, Serialize};

use crate::roster::champion::{Champion, ChampionId};

// GET /champions row
#[derive(Debug, Deserialize, Clone)]
pub struct ChampionDto {
    pub id: i64,
    pub img: String,
    pub name: String,
    pub winrate: f64,
    pub mastery: i64,
    pub won: bool,
    pub played: bool,
}

impl From<ChampionDto> for Champion {
    fn from(dto: ChampionDto) -> Self {
        Champion {
            id: ChampionId(dto.id),
            name: dto.name,
            icon: dto.img,
            win_rate: dto.winrate,
            mastery: dto.mastery,
            won: dto.won,
            played: dto.played,
        }
    }
}

// POST /selection body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRequest {
    pub champion_id: i64,
}

pub fn parse_roster(body: &str) -> Result<Vec<Champion>, serde_json::Error> {
    let rows: Vec<ChampionDto> = serde_json::from_str(body)?;
    Ok(rows.into_iter().map(Champion::from).collect())
}
