use clap::Args;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use triage_ai::error::AppError;
use triage_ai::triage::{PatientPresentation, PredictResponse, TriageEngine, VitalSigns};

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// Reported symptom; repeat the flag for several symptoms
    #[arg(long = "symptom")]
    pub(crate) symptoms: Vec<String>,
    /// Heart rate in beats per minute
    #[arg(long)]
    pub(crate) hr: Option<f64>,
    /// Blood pressure as "systolic/diastolic"
    #[arg(long)]
    pub(crate) bp: Option<String>,
    /// Oxygen saturation in percent
    #[arg(long)]
    pub(crate) spo2: Option<f64>,
    /// Respiratory rate in breaths per minute
    #[arg(long)]
    pub(crate) rr: Option<f64>,
    /// Patient age in years (defaults to 40)
    #[arg(long)]
    pub(crate) age: Option<i32>,
    /// Trauma mechanism, if any
    #[arg(long)]
    pub(crate) trauma_type: Option<String>,
    /// Read a JSON predict request from a file ("-" for stdin); other input flags are ignored
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Print the JSON response instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let as_json = args.json;
    let presentation = load_presentation(args)?;
    let response = PredictResponse::from(TriageEngine::standard().assess(&presentation));

    if as_json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", render_assessment(&response));
    }

    Ok(())
}

fn load_presentation(args: AssessArgs) -> Result<PatientPresentation, AppError> {
    if let Some(path) = args.input {
        let raw = read_input(&path)?;
        return Ok(serde_json::from_str(&raw)?);
    }

    Ok(PatientPresentation {
        symptoms: args.symptoms,
        vitals: VitalSigns {
            hr: args.hr,
            bp: args.bp,
            spo2: args.spo2,
            rr: args.rr,
        },
        age: args.age,
        trauma_type: args.trauma_type,
    })
}

fn read_input(path: &Path) -> Result<String, AppError> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn render_assessment(response: &PredictResponse) -> String {
    let result = &response.result;
    let mut out = String::new();

    out.push_str("Triage assessment\n");
    out.push_str(&format!(
        "{} ({} urgency {}/100)\n",
        result.emergency_type, result.emergency_class, result.urgency_score
    ));
    out.push_str(&format!(
        "Probability {:.3}, confidence {:.2}\n",
        result.probability, result.confidence
    ));
    out.push_str(&format!(
        "Route to {}: {}\n",
        result.hospital_routing.hospital_code, result.hospital_routing.rationale
    ));

    out.push_str("\nRecommended setup\n");
    for item in &result.recommended_setup {
        out.push_str(&format!("- {item}\n"));
    }

    let contributions = &result.recommended_setup_details.contributions;
    if contributions.is_empty() {
        out.push_str("\nScoring rules: none fired\n");
    } else {
        out.push_str("\nScoring rules\n");
        for contribution in contributions {
            out.push_str(&format!(
                "- {}: +{}\n",
                contribution.rule, contribution.points
            ));
        }
    }

    if let Some(alert) = &response.pre_alert {
        out.push_str(&format!(
            "\n[{}] {} -> {}\n{}\n",
            alert.severity, alert.title, alert.hospital_code, alert.body
        ));
    }

    out
}
