//! Contestant response DTOs

use serde::Serialize;

/// Create-or-assign contestant response
#[derive(Debug, Serialize)]
pub struct CreateContestantResponse {
    pub message: String,
    pub concursante_id: i64,
}

/// One row of the standings listing
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct StandingRow {
    pub concursante_id: i64,
    pub nombre: String,
    /// Current rating, 0 when no vote has been submitted
    pub calificacion: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standing_row_wire_keys() {
        let row = StandingRow {
            concursante_id: 7,
            nombre: "Ana".to_string(),
            calificacion: 8.0,
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["concursante_id"], 7);
        assert_eq!(value["nombre"], "Ana");
        assert_eq!(value["calificacion"], 8.0);
    }
}
