//! Premium packages, payments and royalty statements.

use serde::{Deserialize, Serialize};

use super::common::{id_string, lenient_f64, lenient_string, lenient_u64, CalendarDate};

/// A purchasable premium package.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Package {
    /// Package id; the backend keys packages by their name.
    #[serde(default, alias = "jenis", deserialize_with = "id_string")]
    pub id: String,

    /// Display name ("1 month", "1 year", ...).
    #[serde(default, alias = "nama", deserialize_with = "lenient_string")]
    pub name: String,

    /// Price in the backend's currency.
    #[serde(default, alias = "harga", deserialize_with = "lenient_f64")]
    pub price: f64,
}

impl Package {
    /// Name to show, falling back to the id.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// One subscription payment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    #[serde(default, deserialize_with = "id_string")]
    pub id: String,

    /// Package bought.
    #[serde(default, alias = "jenis_paket", deserialize_with = "lenient_string")]
    pub package: String,

    #[serde(default, alias = "timestamp_dimulai", deserialize_with = "lenient_string")]
    pub start_date: String,

    #[serde(default, alias = "timestamp_berakhir", deserialize_with = "lenient_string")]
    pub end_date: String,

    #[serde(default, alias = "metode_bayar", deserialize_with = "lenient_string")]
    pub payment_method: String,

    #[serde(default, alias = "nominal", deserialize_with = "lenient_f64")]
    pub amount: f64,
}

impl Transaction {
    /// First day of the subscription period.
    pub fn start(&self) -> CalendarDate {
        CalendarDate::parse(&self.start_date)
    }

    /// Last day of the subscription period.
    pub fn end(&self) -> CalendarDate {
        CalendarDate::parse(&self.end_date)
    }
}

/// Royalty owed for one song.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Royalty {
    #[serde(default, alias = "judul_lagu", deserialize_with = "lenient_string")]
    pub song_title: String,

    #[serde(default, alias = "judul_album", deserialize_with = "lenient_string")]
    pub album_title: String,

    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_plays: u64,

    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_downloads: u64,

    /// Amount earned.
    #[serde(default, alias = "total_royalti", deserialize_with = "lenient_f64")]
    pub amount: f64,
}

impl Royalty {
    /// Sum of the amounts of `royalties`.
    pub fn sum(royalties: &[Royalty]) -> f64 {
        royalties.iter().map(|r| r.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transaction_from_backend_json() {
        let tx: Transaction = serde_json::from_value(json!({
            "id": "d5e1",
            "jenis_paket": "3 bulan",
            "timestamp_dimulai": "2024-05-01 10:00:00",
            "timestamp_berakhir": "2024-08-01 10:00:00",
            "metode_bayar": "E-Wallet",
            "nominal": "75000.00"
        }))
        .unwrap();

        assert_eq!(tx.package, "3 bulan");
        assert_eq!(tx.start().to_string(), "2024-05-01");
        assert_eq!(tx.end().month, Some(8));
        assert_eq!(tx.amount, 75000.0);
    }

    #[test]
    fn test_package_display_name() {
        let package: Package =
            serde_json::from_value(json!({"jenis": "1 tahun", "harga": 300000})).unwrap();
        assert_eq!(package.display_name(), "1 tahun");
        assert_eq!(package.price, 300000.0);
    }

    #[test]
    fn test_royalty_sum() {
        let royalties = [
            Royalty {
                amount: 10.5,
                ..Default::default()
            },
            Royalty {
                amount: 4.5,
                ..Default::default()
            },
        ];
        assert_eq!(Royalty::sum(&royalties), 15.0);
        assert_eq!(Royalty::sum(&[]), 0.0);
    }

    #[test]
    fn test_royalty_from_backend_json() {
        let royalty: Royalty = serde_json::from_value(json!({
            "judul_lagu": "So What",
            "judul_album": "Kind of Blue",
            "total_plays": 10,
            "total_downloads": 2,
            "total_royalti": 1250.5
        }))
        .unwrap();
        assert_eq!(royalty.amount, 1250.5);
        assert_eq!(royalty.total_downloads, 2);
    }
}
