#[cfg(test)]
mod tests {
    use rand::prelude::SmallRng;
    use rand::SeedableRng;
    use std::time::Instant;
    use test_case::test_case;
    use wlsp::entities::Solution;
    use wlsp::heuristics::{first_fit, decreasing_density_order};
    use wlsp::io::ext_repr::{ExtInstance, ExtRect};
    use wlsp::io::generator::{GeneratorConfig, generate_instance};
    use wlsp::io::svg::{Color, SvgDrawOptions, solution_to_svg};
    use wlsp::io::{export, export_instance, import};

    const INSTANCE_JSON: &str = r#"{
        "name": "tiny",
        "recipient_length": 8.0,
        "rects": [
            {"length": 4.0, "height": 2.0, "weight": 1.0},
            {"length": 4.0, "height": 3.0, "weight": 1.0},
            {"length": 4.0, "height": 1.0, "weight": 1.0}
        ]
    }"#;

    fn ext_instance(recipient_length: f64, rect: ExtRect) -> ExtInstance {
        ExtInstance {
            name: "invalid".to_string(),
            recipient_length,
            rects: vec![rect],
        }
    }

    #[test]
    fn import_and_export() {
        let ext_instance: ExtInstance = serde_json::from_str(INSTANCE_JSON).unwrap();
        let instance = import(&ext_instance).unwrap();
        assert_eq!(instance.n_items(), 3);
        assert_eq!(instance.recipient_length, 8.0);
        assert_eq!(export_instance(&instance, "tiny"), ext_instance);

        let solution = Solution::new(vec![vec![0, 1], vec![2]]);
        let ext_solution = export(&instance, &solution, Instant::now());
        assert_eq!(ext_solution.cost, 3.0);
        assert_eq!(ext_solution.total_height, 4.0);
        assert!(ext_solution.feasible);
        assert_eq!(ext_solution.levels.len(), 2);
        assert_eq!(ext_solution.levels[1].base_height, 3.0);
        assert_eq!(ext_solution.levels[1].height, 1.0);
        assert_eq!(ext_solution.levels[0].used_length, 8.0);
        assert_eq!(ext_solution.levels[1].items, vec![2]);
    }

    #[test]
    fn name_is_optional() {
        let json = r#"{"recipient_length": 1.0, "rects": []}"#;
        let ext_instance: ExtInstance = serde_json::from_str(json).unwrap();
        assert!(import(&ext_instance).unwrap().is_empty());
    }

    #[test_case(10.0, 11.0, 1.0, 1.0; "too long")]
    #[test_case(10.0, -1.0, 1.0, 1.0; "negative length")]
    #[test_case(10.0, 1.0, f64::NAN, 1.0; "nan height")]
    #[test_case(10.0, 1.0, 1.0, f64::INFINITY; "infinite weight")]
    #[test_case(0.0, 0.0, 1.0, 1.0; "zero recipient")]
    fn import_rejects_invalid_instances(recipient_length: f64, length: f64, height: f64, weight: f64) {
        let ext_instance = ext_instance(
            recipient_length,
            ExtRect {
                length,
                height,
                weight,
            },
        );
        assert!(import(&ext_instance).is_err());
    }

    #[test]
    fn generated_instances_respect_config() {
        let mut rng = SmallRng::seed_from_u64(0);
        let config = GeneratorConfig::default();
        for _ in 0..5 {
            let instance = generate_instance(&mut rng, &config);
            assert!((300..=500).contains(&instance.n_items()));
            assert!((30.0..50.0).contains(&instance.recipient_length));
            for r in &instance.rects {
                assert!((3.0..10.0).contains(&r.length));
                assert!((3.0..10.0).contains(&r.height));
                assert!((0.0..10.0).contains(&r.weight));
            }
        }
    }

    #[test]
    fn svg_contains_every_item() {
        let mut rng = SmallRng::seed_from_u64(1);
        let config = GeneratorConfig {
            n_items: (20, 20),
            ..GeneratorConfig::default()
        };
        let instance = generate_instance(&mut rng, &config);
        let solution = first_fit(&instance, &decreasing_density_order(&instance));
        let options = SvgDrawOptions {
            item_labels: true,
            ..SvgDrawOptions::default()
        };
        let document = solution_to_svg(&instance, &solution, options, "test").to_string();
        for i in 0..instance.n_items() {
            assert!(document.contains(&format!("id=\"item_{i}\"")));
        }
        assert!(document.contains("levels: "));
    }

    #[test]
    fn color_parsing() {
        assert_eq!("#CC241D".parse::<Color>(), Ok(Color(0xCC, 0x24, 0x1D)));
        assert_eq!("00ff00".parse::<Color>(), Ok(Color(0x00, 0xFF, 0x00)));
        assert!("#12345".parse::<Color>().is_err());
        assert!("#GG0000".parse::<Color>().is_err());
        assert_eq!(format!("{}", Color(1, 2, 255)), "#0102FF");

        let options = SvgDrawOptions::default();
        let json = serde_json::to_string(&options).unwrap();
        let parsed: SvgDrawOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, options);
    }
}
