use chrono::Utc;

use recordworks_health::{HealthRecords, PatientId};

/// Health records: seed, build the per-patient index, list patients, then
/// look up prescriptions for one known and one unknown patient.
pub fn run() -> anyhow::Result<()> {
    println!("=== Health records ===");

    let mut records = HealthRecords::new();
    records.seed(Utc::now())?;
    records.rebuild_index();

    println!("All Patients:");
    for patient in records.patients() {
        println!("{patient}");
    }

    print_prescriptions(&records, PatientId::new(2));
    print_prescriptions(&records, PatientId::new(99));

    Ok(())
}

fn print_prescriptions(records: &HealthRecords, patient_id: PatientId) {
    let Ok(patient) = records.patient(patient_id) else {
        println!("No patient found with Id {patient_id}");
        return;
    };

    println!("Prescriptions for {} (Id: {}):", patient.name(), patient_id);
    match records.prescriptions_for(patient_id) {
        Ok(prescriptions) if prescriptions.is_empty() => {
            println!("No prescriptions found for this patient.");
        }
        Ok(prescriptions) => {
            for prescription in prescriptions {
                println!("{prescription}");
            }
        }
        Err(err) => println!("lookup failed: {err}"),
    }
}
