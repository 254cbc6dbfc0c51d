use serde::Deserialize;

/// Response for [`Classifieds::get_user_limits`](crate::Classifieds::get_user_limits).
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GetUserLimitsResponse {
    pub listings: UserLimits,
}

/// The listing limits of the session user.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserLimits {
    /// Listing slots used.
    pub used: u32,
    /// Total listing slots.
    pub total: u32,
    #[serde(default)]
    pub promotion_slots_available: Option<u32>,
    #[serde(default)]
    pub baseline: Option<u32>,
    #[serde(default)]
    pub donation_bonus: Option<u32>,
    #[serde(default)]
    pub gifted_premium_months_bonus: Option<u32>,
    #[serde(default)]
    pub multiplier: Option<f64>,
    #[serde(default)]
    pub twitter_follower_bonus: Option<u32>,
    #[serde(default)]
    pub accepted_suggestion_bonus: Option<u32>,
    #[serde(default)]
    pub mvp_donation_bonus: Option<u32>,
    #[serde(default)]
    pub group_membership_bonus: Option<u32>,
    /// Seconds between bumps.
    #[serde(default)]
    pub bump_interval: Option<u32>,
}

impl UserLimits {
    /// The number of listing slots still available.
    pub fn remaining(&self) -> u32 {
        self.total.saturating_sub(self.used)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_user_limits() {
        let response: GetUserLimitsResponse = serde_json::from_str(include_str!("fixtures/user_limits.json")).unwrap();
        let limits = response.listings;

        assert_eq!(limits.used, 0);
        assert_eq!(limits.total, 150);
        assert_eq!(limits.bump_interval, Some(1800));
        assert_eq!(limits.remaining(), 150);
    }
}
