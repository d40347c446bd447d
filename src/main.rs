use anemia_calc::config::cli::{Command, PatientArgs, ProfessionalArgs, SaveArgs};
use anemia_calc::core::engine::{DiagnosticEngine, Evaluation};
use anemia_calc::core::Classification;
use anemia_calc::domain::ports::RecordSink;
use anemia_calc::registration::cpf::{format_cpf, is_valid_cpf};
use anemia_calc::registration::patient::PatientForm;
use anemia_calc::registration::professional::ProfessionalForm;
use anemia_calc::utils::error::{CalcError, ErrorSeverity, Result};
use anemia_calc::utils::number::format_score;
use anemia_calc::utils::{logger, validation::Validate};
use anemia_calc::{CalculatorConfig, CliConfig, EhsaniForm, IgkForm, LocalRecordStore};
use clap::Parser;

fn main() {
    let cli = CliConfig::parse();

    logger::init_logger(logger::LogFormat::from_json_flag(cli.log_json), cli.verbose);

    tracing::info!("Starting anemia-calc");
    tracing::debug!(config = ?cli.config, output_path = ?cli.output_path, "CLI parsed");

    if let Err(e) = run(&cli) {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

fn run(cli: &CliConfig) -> Result<()> {
    let settings = cli.load_settings()?;
    settings.validate()?;
    let records_file = settings.records_file();
    let engine = DiagnosticEngine::new(settings);

    match &cli.command {
        Command::Iron {
            iron,
            ferritin,
            save,
        } => {
            let evaluation = engine.iron(*iron, *ferritin);
            print_evaluation("Iron metabolism", &evaluation);
            persist(&records_file, save, &evaluation)?;
        }
        Command::Electrophoresis { hba2, save } => {
            let evaluation = engine
                .electrophoresis(hba2)
                .inspect_err(|_| println!("Result: Invalid value."))?;
            print_evaluation("Hemoglobin electrophoresis", &evaluation);
            persist(&records_file, save, &evaluation)?;
        }
        Command::Ehsani {
            rbc,
            mcv,
            cutoff,
            save,
        } => {
            let mut form = engine.ehsani_form();
            form.rbc = rbc.clone();
            form.mcv = mcv.clone();
            if let Some(cutoff) = cutoff {
                form.cutoff = cutoff.clone();
            }
            run_ehsani(&engine, &form, &records_file, save)?;
        }
        Command::Igk {
            hb,
            rdw,
            rbc,
            mcv,
            principle,
            save,
        } => {
            let mut form = engine.igk_form();
            form.hb = hb.clone();
            form.rdw = rdw.clone();
            form.rbc = rbc.clone();
            form.mcv = mcv.clone();
            if let Some(principle) = principle {
                form.principle = *principle;
            }
            run_igk(&engine, &form, &records_file, save)?;
        }
        Command::Cpf { value } => {
            if is_valid_cpf(value) {
                println!("✅ Valid CPF: {}", format_cpf(value));
            } else {
                return Err(CalcError::validation(
                    "cpf",
                    "Invalid CPF. Check the number entered.",
                ));
            }
        }
        Command::Screening { birth_date } => {
            let today = chrono::Local::now().date_naive();
            let (age, calculator) = engine.screening_for_birth_date(birth_date, today)?;
            println!("Age: {} years", age);
            println!("Screening calculator: {}", calculator);
        }
        Command::Patient(args) => register_patient(&engine, args)?,
        Command::Professional(args) => register_professional(args)?,
        Command::History { patient_id } => {
            let store = LocalRecordStore::new(&records_file);
            let records = store.history(patient_id)?;
            if records.is_empty() {
                println!("No results stored for patient {}", patient_id);
            }
            for record in records {
                let score = record
                    .values
                    .score()
                    .map(format_score)
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{}  {:<16} {:>8}  {}",
                    record.recorded_at.format("%d/%m/%Y %H:%M"),
                    record.values.kind(),
                    score,
                    record.interpretation.replace('\n', " ")
                );
            }
        }
    }

    Ok(())
}

fn run_ehsani(
    engine: &DiagnosticEngine<CalculatorConfig>,
    form: &EhsaniForm,
    records_file: &std::path::Path,
    save: &SaveArgs,
) -> Result<()> {
    let evaluation = engine.ehsani(form)?;
    print_evaluation("Ehsani index", &evaluation);
    persist(records_file, save, &evaluation)
}

fn run_igk(
    engine: &DiagnosticEngine<CalculatorConfig>,
    form: &IgkForm,
    records_file: &std::path::Path,
    save: &SaveArgs,
) -> Result<()> {
    let evaluation = engine.igk(form)?;
    println!("Counting principle: {}", form.principle);
    print_evaluation("IGK index", &evaluation);
    persist(records_file, save, &evaluation)
}

fn print_evaluation<L: Classification>(title: &str, evaluation: &Evaluation<L>) {
    println!("{}", title);
    if let Some(score) = evaluation.result.score {
        println!("Score: {}", format_score(score));
    }
    println!("Result: {}", evaluation.interpretation());
    if let Some(next) = evaluation.result.next_step() {
        println!("Next: {} calculator", next);
    }
}

fn persist<L: Classification>(
    records_file: &std::path::Path,
    save: &SaveArgs,
    evaluation: &Evaluation<L>,
) -> Result<()> {
    if !save.save {
        return Ok(());
    }
    let patient_id = save.patient_id.as_deref().ok_or_else(|| CalcError::MissingField {
        field: "patient_id".to_string(),
    })?;

    let record = evaluation.to_record(patient_id, chrono::Utc::now());
    let mut store = LocalRecordStore::new(records_file);
    store.append(&record)?;

    tracing::info!("📁 Result saved to: {}", store.path().display());
    println!("✅ Result saved for patient {}", patient_id);
    Ok(())
}

fn register_patient(engine: &DiagnosticEngine<CalculatorConfig>, args: &PatientArgs) -> Result<()> {
    let form = PatientForm {
        name: args.name.clone(),
        cpf: args.cpf.clone(),
        birth_date: args.birth_date.clone(),
        height: args.height.clone(),
        weight: args.weight.clone(),
        gender: args.gender.clone(),
    };
    let patient = form.validate(engine.settings(), chrono::Local::now().date_naive())?;

    tracing::info!("✅ Patient form validated");
    println!("{}", serde_json::to_string_pretty(&patient)?);
    println!("Next: {} calculator", patient.screening);
    Ok(())
}

fn register_professional(args: &ProfessionalArgs) -> Result<()> {
    let form = ProfessionalForm {
        name: args.name.clone(),
        email: args.email.clone(),
        profession: args.profession.clone(),
        specialty: args.specialty.clone(),
        workplace: args.workplace.clone(),
        phone: args.phone.clone(),
        password: args.password.clone(),
        password_confirmation: args.password_confirmation.clone(),
    };
    let professional = form.validate()?;

    tracing::info!("✅ Professional form validated");
    println!("{}", serde_json::to_string_pretty(&professional)?);
    Ok(())
}
