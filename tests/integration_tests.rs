use workoutrs::{create_workout, default_packages, render_report, run_batch, OutputFormat};

/// Integration tests that run complete sensor sessions end to end

#[cfg(test)]
mod integration_tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;
    use workoutrs::import::ImportManager;
    use workoutrs::{AppConfig, Package, Training, WorkoutError};

    const REFERENCE_OUTPUT: &str = "\
Training type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; Avg speed: 1.000 km/h; Calories burned: 336.000.
Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories burned: 797.805.
Training type: SportsWalking; Duration: 1.000 h.; Distance: 5.850 km; Avg speed: 5.850 km/h; Calories burned: 349.252.";

    /// The reference session reproduces the known output line for line
    #[test]
    fn test_reference_session() {
        let report = run_batch(&default_packages(), false);

        assert!(report.is_success());
        assert_eq!(
            render_report(&report, OutputFormat::Text).unwrap(),
            REFERENCE_OUTPUT
        );
    }

    /// Each package goes through dispatch, summary and rendering on its own
    #[test]
    fn test_dispatch_summarize_render() {
        for (package, expected) in default_packages().iter().zip(REFERENCE_OUTPUT.lines()) {
            let workout = create_workout(&package.code, &package.data).unwrap();
            let summary = workout.summarize().unwrap();

            assert_eq!(summary.render(), expected);
            assert_eq!(workout.summarize().unwrap(), summary);
        }
    }

    #[test]
    fn test_unknown_code_is_skipped() {
        let mut packages = default_packages();
        packages.insert(1, Package::new("SM", vec![720.0, 1.0, 80.0, 25.0, 40.0]));

        let report = run_batch(&packages, false);
        assert_eq!(report.succeeded(), 3);
        assert_eq!(report.failed(), 1);

        let (outcome, err) = report.failures().next().unwrap();
        assert_eq!(outcome.code, "SM");
        assert!(matches!(err, WorkoutError::UnknownKind { .. }));

        // Remaining packages render exactly as in the clean session
        assert_eq!(
            render_report(&report, OutputFormat::Text).unwrap(),
            REFERENCE_OUTPUT
        );
    }

    #[test]
    fn test_every_field_has_three_decimals() {
        let workouts = [
            create_workout("RUN", &[1.0, 0.001, 40.0]).unwrap(),
            create_workout("WLK", &[1_000_000.0, 3.0, 120.0, 210.0]).unwrap(),
            create_workout("SWM", &[0.0, 0.75, 55.5, 33.3, 7.0]).unwrap(),
        ];

        for workout in &workouts {
            let line = workout.summarize().unwrap().render();
            let numbers: Vec<&str> = line
                .split(|c: char| c == ' ' || c == ';')
                .filter(|token| token.chars().next().is_some_and(|c| c.is_ascii_digit()))
                .map(|token| token.trim_end_matches('.'))
                .collect();

            assert_eq!(numbers.len(), 4, "{line}");
            for number in numbers {
                let (_, decimals) = number.split_once('.').unwrap();
                assert_eq!(decimals.len(), 3, "{line}");
            }
        }
    }

    #[test]
    fn test_csv_file_session() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "code,values").unwrap();
        writeln!(file, "SWM,720;1;80;25;40").unwrap();
        writeln!(file, "RUN,15000;1;75").unwrap();
        writeln!(file, "WLK,9000;1;75;180").unwrap();

        let packages = ImportManager::new().import_file(file.path()).unwrap();
        assert_eq!(packages, default_packages());

        let report = run_batch(&packages, false);
        assert_eq!(
            render_report(&report, OutputFormat::Text).unwrap(),
            REFERENCE_OUTPUT
        );
    }

    #[test]
    fn test_toml_file_session() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            "[[packages]]\ncode = \"WLK\"\ndata = [9000, 1, 75, 180]\n"
        )
        .unwrap();

        let packages = ImportManager::new().import_file(file.path()).unwrap();
        let report = run_batch(&packages, false);

        assert_eq!(
            render_report(&report, OutputFormat::Text).unwrap(),
            REFERENCE_OUTPUT.lines().last().unwrap()
        );
    }

    #[test]
    fn test_config_packages_session() {
        let config = AppConfig::load_from_string(
            "[output]\nformat = \"json\"\n\n[[packages]]\ncode = \"RUN\"\ndata = [15000, 1, 75]\n",
        )
        .unwrap();

        let report = run_batch(&config.packages_or_default(), config.output.fail_fast);
        let json = render_report(&report, config.output.format).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summaries"].as_array().unwrap().len(), 1);
        let calories = value["summaries"][0]["calories_kcal"].as_f64().unwrap();
        assert!((calories - 797.805).abs() < 1e-9);
        assert!(value["failures"].as_array().unwrap().is_empty());
    }
}
