//! Unit tests for season, week and date types

use super::*;

#[cfg(test)]
mod season_tests {
    use super::*;

    #[test]
    fn test_season_new() {
        let season = Season::new(2023).unwrap();
        assert_eq!(season.as_u16(), 2023);
        assert_eq!(season.to_string(), "2023");
    }

    #[test]
    fn test_season_minimum_boundary() {
        assert!(Season::new(MIN_SEASON).is_ok());
        assert_eq!(
            Season::new(1998).unwrap_err(),
            NflError::InvalidSeason {
                season: 1998,
                min: 1999
            }
        );
        assert!(Season::new(0).is_err());
    }

    #[test]
    fn test_season_upper_bound_is_storage_width() {
        assert!(Season::new(2100).is_ok());
        assert!(Season::new(u16::MAX).is_ok());
    }

    #[test]
    fn test_season_from_str() {
        assert_eq!(Season::from_str("2021").unwrap().as_u16(), 2021);
        assert!(matches!(
            Season::from_str(" 2021 "),
            Err(NflError::ParseInt(_))
        ));

        match Season::from_str("twenty").unwrap_err() {
            NflError::ParseInt(_) => (),
            other => panic!("Expected ParseInt error, got {other:?}"),
        }
        assert!(matches!(
            Season::from_str("1990"),
            Err(NflError::InvalidSeason { .. })
        ));
    }

    #[test]
    fn test_season_out_of_storage_range_reports_domain_error() {
        let error = Season::from_str("70000").unwrap_err();
        assert_eq!(
            error,
            NflError::InvalidSeason {
                season: 70000,
                min: 1999
            }
        );
        assert!(error.to_string().contains("1999"));

        assert!(matches!(
            Season::from_str("-2023"),
            Err(NflError::InvalidSeason { season: -2023, .. })
        ));
    }

    #[test]
    fn test_season_serde() {
        let season = Season::new(2024).unwrap();
        let json = serde_json::to_string(&season).unwrap();
        assert_eq!(json, "2024");

        let deserialized: Season = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, season);

        assert!(serde_json::from_str::<Season>("1950").is_err());
    }
}

#[cfg(test)]
mod week_tests {
    use super::*;

    #[test]
    fn test_week_bounds() {
        assert!(Week::new(0).is_err());
        assert!(Week::new(1).is_ok());
        assert!(Week::new(MAX_REGULAR_SEASON_WEEK).is_ok());
        assert!(Week::new(MAX_PLAYOFF_WEEK).is_ok());
        assert_eq!(
            Week::new(23).unwrap_err(),
            NflError::InvalidWeek { week: 23, max: 22 }
        );
    }

    #[test]
    fn test_week_phase_helpers() {
        let week = Week::new(18).unwrap();
        assert!(week.is_regular_season());
        assert!(!week.is_postseason());

        let week = Week::new(19).unwrap();
        assert!(!week.is_regular_season());
        assert!(week.is_postseason());
    }

    #[test]
    fn test_playoff_rounds() {
        assert_eq!(Week::new(5).unwrap().playoff_round(), None);
        assert_eq!(
            Week::new(19).unwrap().playoff_round(),
            Some(PlayoffRound::WildCard)
        );
        assert_eq!(
            Week::new(20).unwrap().playoff_round(),
            Some(PlayoffRound::Divisional)
        );
        assert_eq!(
            Week::new(21).unwrap().playoff_round(),
            Some(PlayoffRound::Conference)
        );
        assert_eq!(
            Week::new(22).unwrap().playoff_round(),
            Some(PlayoffRound::SuperBowl)
        );
        assert_eq!(PlayoffRound::SuperBowl.to_string(), "Super Bowl");
    }

    #[test]
    fn test_playoff_round_codes_and_serde() {
        for round in PlayoffRound::ALL {
            assert_eq!(PlayoffRound::from_str(round.as_str()).unwrap(), round);
            let json = serde_json::to_string(&round).unwrap();
            assert_eq!(json, format!("\"{}\"", round.as_str()));
            assert_eq!(serde_json::from_str::<PlayoffRound>(&json).unwrap(), round);
        }
        assert_eq!(PlayoffRound::WildCard.as_str(), "wild-card");

        match PlayoffRound::from_str("Wild Card").unwrap_err() {
            NflError::InvalidPlayoffRound { value } => assert_eq!(value, "Wild Card"),
            other => panic!("Expected InvalidPlayoffRound error, got {other:?}"),
        }
        assert!(serde_json::from_str::<PlayoffRound>("\"SuperBowl\"").is_err());
    }

    #[test]
    fn test_playoff_round_weeks_cover_postseason() {
        let weeks: Vec<u8> = PlayoffRound::ALL.iter().map(|r| r.week()).collect();
        let expected: Vec<u8> = SeasonType::POST.week_range().collect();
        assert_eq!(weeks, expected);
    }

    #[test]
    fn test_week_from_str() {
        assert_eq!(Week::from_str("7").unwrap().as_u8(), 7);
        assert!(Week::from_str("0").is_err());
        assert!(Week::from_str("week 7").is_err());
        assert!(Week::from_str("256").is_err());
    }

    #[test]
    fn test_week_out_of_storage_range_reports_domain_error() {
        assert_eq!(
            Week::from_str("300").unwrap_err(),
            NflError::InvalidWeek { week: 300, max: 22 }
        );
        assert_eq!(
            Week::from_str("-1").unwrap_err(),
            NflError::InvalidWeek { week: -1, max: 22 }
        );
        assert!(matches!(Week::from_str(" 7"), Err(NflError::ParseInt(_))));
    }

    #[test]
    fn test_week_serde() {
        let week = Week::new(12).unwrap();
        assert_eq!(serde_json::to_string(&week).unwrap(), "12");
        assert_eq!(serde_json::from_str::<Week>("12").unwrap(), week);
        assert!(serde_json::from_str::<Week>("30").is_err());
    }
}

#[cfg(test)]
mod season_type_tests {
    use super::*;

    #[test]
    fn test_season_type_codes() {
        for season_type in SeasonType::ALL {
            assert_eq!(
                SeasonType::from_str(season_type.as_str()).unwrap(),
                season_type
            );
        }
        assert_eq!(SeasonType::POST.to_string(), "POST");
        assert_eq!(SeasonType::PRE.description(), "Preseason");
    }

    #[test]
    fn test_season_type_rejects_other_casing() {
        assert!(SeasonType::from_str("reg").is_err());
        assert!(SeasonType::from_str("Regular").is_err());
        match SeasonType::from_str("WC").unwrap_err() {
            NflError::InvalidSeasonType { value } => assert_eq!(value, "WC"),
            other => panic!("Expected InvalidSeasonType error, got {other:?}"),
        }
    }

    #[test]
    fn test_season_type_week_ranges() {
        assert_eq!(SeasonType::REG.week_range(), 1..=18);
        assert_eq!(SeasonType::POST.week_range(), 19..=22);
        assert_eq!(SeasonType::PRE.week_range(), 1..=18);
    }

    #[test]
    fn test_season_type_serde() {
        assert_eq!(serde_json::to_string(&SeasonType::REG).unwrap(), "\"REG\"");
        let st: SeasonType = serde_json::from_str("\"POST\"").unwrap();
        assert_eq!(st, SeasonType::POST);
    }
}

#[cfg(test)]
mod date_string_tests {
    use super::*;

    #[test]
    fn test_valid_date() {
        let date = DateString::new("2023-09-07").unwrap();
        assert_eq!(date.as_str(), "2023-09-07");
        assert_eq!(date.year(), 2023);
        assert_eq!(date.month(), 9);
        assert_eq!(date.day(), 7);
        assert_eq!(date.to_string(), "2023-09-07");
    }

    #[test]
    fn test_date_shape_only() {
        // No calendar check: day 31 is accepted for any month.
        assert!(DateString::new("2023-02-31").is_ok());
    }

    #[test]
    fn test_invalid_dates() {
        for bad in [
            "",
            "2023-9-7",
            "2023/09/07",
            "09-07-2023",
            "2023-13-01",
            "2023-00-10",
            "2023-01-00",
            "2023-01-32",
            "2023-01-1a",
            "2023-09-07T00:00",
            "+023-09-07",
        ] {
            match DateString::new(bad) {
                Err(NflError::InvalidDate { value }) => assert_eq!(value, bad),
                other => panic!("Expected InvalidDate for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_date_serde() {
        let date = DateString::new("2024-02-11").unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2024-02-11\"");
        assert_eq!(serde_json::from_str::<DateString>(&json).unwrap(), date);
        assert!(serde_json::from_str::<DateString>("\"Feb 11\"").is_err());
    }
}
