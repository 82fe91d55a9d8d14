use serde::{Deserialize, Serialize};

// 地址实体，归属于唯一的学生
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: i64,
    pub street: String,
    pub number: String,
    pub unit: Option<String>,
    pub district: String,
    pub city: String,
    pub region: String,
    pub student_id: i64,
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}, {}, {}, {}",
            self.street,
            self.number,
            self.unit.as_deref().unwrap_or_default(),
            self.district,
            self.region
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(unit: Option<&str>) -> Address {
        Address {
            id: 1,
            street: "Av. Siempre Viva".to_string(),
            number: "742".to_string(),
            unit: unit.map(str::to_string),
            district: "Providencia".to_string(),
            city: "Santiago".to_string(),
            region: "Metropolitana".to_string(),
            student_id: 1,
        }
    }

    #[test]
    fn test_display_with_unit() {
        assert_eq!(
            address(Some("12B")).to_string(),
            "Av. Siempre Viva - 742, 12B, Providencia, Metropolitana"
        );
    }

    #[test]
    fn test_display_without_unit() {
        assert_eq!(
            address(None).to_string(),
            "Av. Siempre Viva - 742, , Providencia, Metropolitana"
        );
    }
}
