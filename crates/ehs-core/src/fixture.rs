//! The sample data set written by the seed operation.
//!
//! Dates are relative to the `now` passed in, so a freshly seeded store always
//! shows upcoming inspections, trainings and permits.

use chrono::{DateTime, Duration, Utc};

use crate::{
  chemical::Chemical,
  incident::{Incident, IncidentStatus, Severity},
  inspection::{Inspection, InspectionStatus},
  permit::{Permit, PermitStatus},
  training::{Training, TrainingStatus},
};

fn days(n: i64) -> Duration { Duration::days(n) }

fn hours(n: i64) -> Duration { Duration::hours(n) }

pub fn incidents(now: DateTime<Utc>) -> Vec<Incident> {
  vec![
    Incident {
      title:       "Slip and Fall in Warehouse".into(),
      description: "Employee slipped on wet floor in loading area".into(),
      severity:    Severity::Medium,
      status:      IncidentStatus::UnderInvestigation,
      category:    "Injury".into(),
      location:    "Warehouse A - Loading Bay".into(),
      reported_by: "John Smith".into(),
      reported_at: now,
    },
    Incident {
      title:       "Chemical Spill - Lab 3".into(),
      description: "Small acetone spill during transfer operation".into(),
      severity:    Severity::Low,
      status:      IncidentStatus::Resolved,
      category:    "Environmental".into(),
      location:    "Laboratory 3".into(),
      reported_by: "Sarah Johnson".into(),
      reported_at: now,
    },
    Incident {
      title:       "Near Miss - Forklift Operation".into(),
      description: "Forklift nearly collided with pedestrian".into(),
      severity:    Severity::High,
      status:      IncidentStatus::UnderInvestigation,
      category:    "Near Miss".into(),
      location:    "Warehouse B".into(),
      reported_by: "Mike Chen".into(),
      reported_at: now,
    },
  ]
}

pub fn inspections(now: DateTime<Utc>) -> Vec<Inspection> {
  vec![
    Inspection {
      title:        "Monthly Fire Safety Inspection".into(),
      kind:         "Safety".into(),
      location:     "Building A - All Floors".into(),
      inspector:    "Fire Marshal".into(),
      status:       InspectionStatus::Scheduled,
      score:        None,
      findings:     None,
      due_date:     now + days(5),
      completed_at: None,
    },
    Inspection {
      title:        "PPE Compliance Audit".into(),
      kind:         "Compliance".into(),
      location:     "Manufacturing Floor".into(),
      inspector:    "Safety Officer".into(),
      status:       InspectionStatus::Completed,
      score:        Some(95),
      findings:     Some(
        "Overall excellent compliance. Minor issues with glove storage.".into(),
      ),
      due_date:     now - days(2),
      completed_at: Some(now - days(2)),
    },
  ]
}

pub fn trainings(now: DateTime<Utc>) -> Vec<Training> {
  vec![
    Training {
      title:         "Hazardous Waste Management".into(),
      description:   "Required training for all lab personnel on proper hazardous waste disposal"
        .into(),
      kind:          "Environmental".into(),
      instructor:    "Dr. Emily Watson".into(),
      location:      "Training Room 1".into(),
      start_date:    now + days(7),
      end_date:      now + days(7) + hours(4),
      max_attendees: 20,
      attendees:     vec!["Alice Brown".into(), "Bob Wilson".into(), "Carol Davis".into()],
      status:        TrainingStatus::Scheduled,
    },
    Training {
      title:         "First Aid & CPR Certification".into(),
      description:   "Annual first aid and CPR recertification".into(),
      kind:          "Health".into(),
      instructor:    "Certified Paramedic Team".into(),
      location:      "Medical Center".into(),
      start_date:    now + days(14),
      end_date:      now + days(14) + hours(8),
      max_attendees: 15,
      attendees:     Vec::new(),
      status:        TrainingStatus::OpenForRegistration,
    },
  ]
}

pub fn permits(now: DateTime<Utc>) -> Vec<Permit> {
  vec![
    Permit {
      title:        "Hot Work Permit - Welding Operations".into(),
      kind:         "Hot Work".into(),
      location:     "Manufacturing Floor - Section C".into(),
      requested_by: "David Martinez".into(),
      approved_by:  Some("Safety Manager".into()),
      status:       PermitStatus::Approved,
      start_date:   now,
      end_date:     now + hours(8),
      hazards:      "Fire, Burns, Fumes".into(),
      controls:     "Fire extinguisher on site, Fire watch assigned, Area cleared of combustibles"
        .into(),
    },
    Permit {
      title:        "Confined Space Entry - Tank Cleaning".into(),
      kind:         "Confined Space".into(),
      location:     "Tank Farm - Tank 5".into(),
      requested_by: "James Lee".into(),
      approved_by:  None,
      status:       PermitStatus::PendingApproval,
      start_date:   now + days(2),
      end_date:     now + days(2) + hours(6),
      hazards:      "Oxygen deficiency, Toxic atmosphere, Engulfment".into(),
      controls:     "Atmospheric testing, Ventilation, Standby rescue team, Communication equipment"
        .into(),
    },
  ]
}

pub fn chemicals(now: DateTime<Utc>) -> Vec<Chemical> {
  let chemical = |name: &str, cas: &str, location: &str, quantity: &str, unit: &str,
                  hazard_class: &str, sds: &str, expires_in: i64, inspected_ago: i64| {
    Chemical {
      name:           name.into(),
      cas_number:     Some(cas.into()),
      location:       location.into(),
      quantity:       quantity.into(),
      unit:           unit.into(),
      hazard_class:   hazard_class.into(),
      sds_url:        Some(format!("https://example.com/sds/{sds}.pdf")),
      expiry_date:    Some(now + days(expires_in)),
      last_inspected: now - days(inspected_ago),
    }
  };

  vec![
    chemical(
      "Acetone", "67-64-1", "Chemical Storage Room A", "50", "L",
      "Flammable Liquid", "acetone", 365, 30,
    ),
    chemical(
      "Sulfuric Acid", "7664-93-9", "Chemical Storage Room B", "25", "L",
      "Corrosive", "sulfuric-acid", 730, 15,
    ),
    chemical(
      "Sodium Hydroxide", "1310-73-2", "Laboratory 2", "10", "kg",
      "Corrosive", "sodium-hydroxide", 500, 45,
    ),
  ]
}
