use crate::config::PrizeConfig;
use crate::error::{AppError, AppResult};
use rand::Rng;

/// 按权重 (basis points) 随机抽取一个奖品名称
pub fn draw_prize(prizes: &[PrizeConfig]) -> AppResult<&str> {
    let total: i64 = prizes.iter().map(|p| i64::from(p.weight_bp.max(0))).sum();
    if prizes.is_empty() || total <= 0 {
        return Err(AppError::InternalError(
            "No prizes configured for the campaign".into(),
        ));
    }

    let mut rng = rand::thread_rng();
    let roll = rng.gen_range(0..total);
    Ok(pick_at(prizes, roll))
}

/// 累加权重落点选择；roll 必须落在 [0, total) 区间
fn pick_at(prizes: &[PrizeConfig], roll: i64) -> &str {
    let mut acc: i64 = 0;
    for p in prizes {
        acc += i64::from(p.weight_bp.max(0));
        if roll < acc {
            return &p.name;
        }
    }
    // roll 越界时退回最后一项（正常调用不会走到这里）
    &prizes[prizes.len() - 1].name
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheel() -> Vec<PrizeConfig> {
        vec![
            PrizeConfig {
                name: "Prize 1".into(),
                weight_bp: 1000,
            },
            PrizeConfig {
                name: "Prize 2".into(),
                weight_bp: 4000,
            },
            PrizeConfig {
                name: "Thank You".into(),
                weight_bp: 5000,
            },
        ]
    }

    #[test]
    fn test_pick_at_boundaries() {
        let prizes = wheel();
        assert_eq!(pick_at(&prizes, 0), "Prize 1");
        assert_eq!(pick_at(&prizes, 999), "Prize 1");
        assert_eq!(pick_at(&prizes, 1000), "Prize 2");
        assert_eq!(pick_at(&prizes, 4999), "Prize 2");
        assert_eq!(pick_at(&prizes, 5000), "Thank You");
        assert_eq!(pick_at(&prizes, 9999), "Thank You");
    }

    #[test]
    fn test_draw_prize_returns_configured_name() {
        let prizes = wheel();
        let names: Vec<&str> = prizes.iter().map(|p| p.name.as_str()).collect();
        for _ in 0..50 {
            let picked = draw_prize(&prizes).unwrap();
            assert!(names.contains(&picked));
        }
    }

    #[test]
    fn test_draw_prize_single_entry_is_deterministic() {
        let prizes = vec![PrizeConfig {
            name: "Grand Prize".into(),
            weight_bp: 10000,
        }];
        assert_eq!(draw_prize(&prizes).unwrap(), "Grand Prize");
    }

    #[test]
    fn test_empty_wheel_is_an_error() {
        assert!(draw_prize(&[]).is_err());
    }

    #[test]
    fn test_zero_weight_wheel_is_an_error() {
        let prizes = vec![PrizeConfig {
            name: "Prize 1".into(),
            weight_bp: 0,
        }];
        assert!(draw_prize(&prizes).is_err());
    }
}
