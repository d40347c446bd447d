use anemia_calc::domain::ports::RecordSink;
use anemia_calc::domain::record::RecordValues;
use anemia_calc::{
    CalculatorConfig, CountingPrinciple, DiagnosticEngine, IgkForm, LocalRecordStore, OrdinalFlag,
};
use anyhow::Result;
use chrono::{Duration, Utc};
use tempfile::TempDir;

#[test]
fn test_saved_results_read_back_newest_first() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("nested").join("resultados.jsonl");
    let mut store = LocalRecordStore::new(&path);
    let engine = DiagnosticEngine::new(CalculatorConfig::default());

    let form = IgkForm {
        hb: "12,5".into(),
        rdw: "14".into(),
        rbc: "4,5".into(),
        mcv: "80".into(),
        principle: CountingPrinciple::Impedance,
    };
    let igk = engine.igk(&form)?;
    let iron = engine.iron(OrdinalFlag::Low, OrdinalFlag::Low);

    let earlier = Utc::now() - Duration::minutes(5);
    store.append(&igk.to_record("patient-1", earlier))?;
    store.append(&iron.to_record("patient-1", Utc::now()))?;
    store.append(&iron.to_record("patient-2", Utc::now()))?;

    assert!(path.exists());

    let history = store.history("patient-1")?;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].values.kind(), "MetabolismoFerro");
    match &history[1].values {
        RecordValues::Igk { igk, principle, .. } => {
            assert!((igk - 71.68).abs() < 1e-9);
            assert_eq!(*principle, CountingPrinciple::Impedance);
        }
        other => panic!("unexpected record {:?}", other),
    }

    Ok(())
}

#[test]
fn test_history_of_missing_file_is_empty() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = LocalRecordStore::new(temp_dir.path().join("none.jsonl"));
    assert!(store.history("anyone")?.is_empty());
    Ok(())
}

#[test]
fn test_unreadable_lines_do_not_hide_history() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("r.jsonl");
    let mut store = LocalRecordStore::new(&path);
    let engine = DiagnosticEngine::new(CalculatorConfig::default());

    store.append(&engine.iron(OrdinalFlag::Low, OrdinalFlag::Low).to_record("p-1", Utc::now()))?;
    let mut content = std::fs::read_to_string(&path)?;
    content.push_str(concat!(
        r#"{"patientId":"p-2","tipo":"Ehsani","rbc":1e308,"vcm":80.0,"cutOff":15.0,"#,
        r#""ehsani":null,"interpretacao":"x","data":"2025-01-01T00:00:00Z"}"#,
        "\nnot json\n"
    ));
    std::fs::write(&path, content)?;
    store.append(&engine.iron(OrdinalFlag::High, OrdinalFlag::High).to_record("p-1", Utc::now()))?;

    assert_eq!(store.history("p-1")?.len(), 2);
    assert!(store.history("p-2")?.is_empty());
    Ok(())
}

#[test]
fn test_record_lines_use_store_field_names() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("r.jsonl");
    let mut store = LocalRecordStore::new(&path);
    let engine = DiagnosticEngine::new(CalculatorConfig::default());

    let mut form = engine.ehsani_form();
    form.rbc = "6".into();
    form.mcv = "50".into();
    store.append(&engine.ehsani(&form)?.to_record("p", Utc::now()))?;

    let content = std::fs::read_to_string(&path)?;
    let value: serde_json::Value = serde_json::from_str(content.trim())?;
    assert_eq!(value["tipo"], "Ehsani");
    assert_eq!(value["ehsani"], -10.0);
    assert_eq!(value["cutOff"], 15.0);
    assert!(value["interpretacao"]
        .as_str()
        .unwrap()
        .contains("thalassemia"));
    Ok(())
}
