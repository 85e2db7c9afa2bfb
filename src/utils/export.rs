use crate::entities::order_record_entity;

/// 导出所有订单号记录为 CSV 文本
/// 列与线上字段命名保持一致；timestamp 取兑换时间，未兑换时取登记时间
pub fn order_records_csv(records: &[order_record_entity::Model]) -> String {
    let mut out = String::from("orderNumber,hasPlayed,drawResult,timestamp\n");

    for r in records {
        let timestamp = r
            .played_at
            .or(r.created_at)
            .map(|t| t.to_rfc3339())
            .unwrap_or_default();
        out.push_str(&format!(
            "{},{},{},{}\n",
            escape_field(&r.order_number),
            r.has_played,
            escape_field(r.draw_result.as_deref().unwrap_or("")),
            timestamp
        ));
    }

    out
}

/// 仅在字段包含分隔符/引号/换行时加引号
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(order_number: &str, has_played: bool) -> order_record_entity::Model {
        order_record_entity::Model {
            order_number: order_number.to_string(),
            has_played,
            draw_result: has_played.then(|| "Prize 2".to_string()),
            created_at: Some(Utc.with_ymd_and_hms(2026, 1, 5, 10, 0, 0).unwrap()),
            played_at: has_played.then(|| Utc.with_ymd_and_hms(2026, 1, 6, 12, 30, 0).unwrap()),
        }
    }

    #[test]
    fn test_csv_header_and_rows() {
        let csv = order_records_csv(&[record("ORD-1", true), record("ORD-2", false)]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "orderNumber,hasPlayed,drawResult,timestamp");
        assert!(lines[1].starts_with("ORD-1,true,Prize 2,2026-01-06T12:30:00"));
        assert!(lines[2].starts_with("ORD-2,false,,2026-01-05T10:00:00"));
    }

    #[test]
    fn test_csv_escapes_separators() {
        let mut r = record("ORD,3", true);
        r.draw_result = Some("Prize \"A\"".to_string());
        let csv = order_records_csv(&[r]);
        assert!(csv.contains("\"ORD,3\""));
        assert!(csv.contains("\"Prize \"\"A\"\"\""));
    }

    #[test]
    fn test_csv_empty_input_keeps_header() {
        let csv = order_records_csv(&[]);
        assert_eq!(csv, "orderNumber,hasPlayed,drawResult,timestamp\n");
    }
}
