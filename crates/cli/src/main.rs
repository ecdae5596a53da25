use clap::{Parser, Subcommand};
use clinic_core::{
    config::core_config_from_env_values, BookingSelection, ClinicCatalog, ClinicCatalogFile, ClinicId,
    ClinicRecord, DirectoryService, FilterState, Notification,
};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "clinic")]
#[command(about = "Clinic directory CLI")]
struct Cli {
    /// YAML clinic catalog to use instead of the built-in one
    #[arg(long, global = true, env = "CLINIC_CATALOG_FILE")]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List clinics matching the filter
    List {
        /// Case-insensitive text matched against names and specialties
        #[arg(long, default_value = "")]
        search: String,
        /// Minimum rating
        #[arg(long)]
        min_rating: Option<f64>,
        /// Maximum consultation fee
        #[arg(long)]
        max_price: Option<f64>,
        /// Maximum distance in kilometres
        #[arg(long)]
        max_distance: Option<f64>,
        /// Exact specialty tag
        #[arg(long)]
        specialty: Option<String>,
    },
    /// List the popular specialty tags and every specialty in the catalog
    Specialties,
    /// Attempt a mock booking
    Book {
        /// Clinic ID
        id: u32,
        /// Appointment date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// Appointment time (HH:MM)
        #[arg(long)]
        time: Option<String>,
    },
    /// Show the emergency number and its telephone URI
    Emergency,
    /// Print the catalog as YAML
    Export,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let cfg = core_config_from_env_values(
        cli.catalog,
        std::env::var("CLINIC_EMERGENCY_NUMBER").ok(),
        std::env::var("CLINIC_BOOKING_SCOPE").ok(),
    )?;
    let service = DirectoryService::from_config(Arc::new(cfg))?;

    match cli.command {
        Some(Commands::List {
            search,
            min_rating,
            max_price,
            max_distance,
            specialty,
        }) => {
            let defaults = FilterState::default();
            let filter = FilterState {
                search_text: search,
                min_rating: min_rating.unwrap_or(defaults.min_rating),
                max_price: max_price.unwrap_or(defaults.max_price),
                max_distance_km: max_distance.unwrap_or(defaults.max_distance_km),
                selected_specialty: specialty.filter(|s| !s.is_empty()),
            };
            let clinics = service.search(&filter);
            if clinics.is_empty() {
                println!("No clinics match your filters.");
            } else {
                for clinic in &clinics {
                    println!("{}", describe(clinic));
                }
            }
        }
        Some(Commands::Specialties) => {
            println!("Popular:");
            for option in clinic_core::specialty_options(&FilterState::default()) {
                println!("  {}", option.name);
            }
            println!("In catalog:");
            for specialty in service.specialties() {
                println!("  {}", specialty);
            }
        }
        Some(Commands::Book { id, date, time }) => {
            let selection = BookingSelection {
                selected_date: date,
                selected_time: time,
            };
            let outcome = service.book(ClinicId::new(id), &selection);
            print_notification(&Notification::from(&outcome));
            if !outcome.is_confirmed() {
                std::process::exit(1);
            }
        }
        Some(Commands::Emergency) => {
            let call = service.emergency_call();
            print_notification(&call.notification());
            println!("{}", call.tel_uri());
        }
        Some(Commands::Export) => {
            let records = service.catalog().list();
            print!("{}", ClinicCatalogFile::render(&records)?);
        }
        None => {
            println!("Use 'clinic --help' for commands");
        }
    }

    Ok(())
}

fn describe(clinic: &ClinicRecord) -> String {
    let specialties: Vec<&str> = clinic.specialties.iter().map(|s| s.as_str()).collect();
    let medicines = match clinic.offers_medicines {
        Some(true) => ", medicines available",
        _ => "",
    };
    format!(
        "ID: {}, Name: {}, Location: {}, Rating: {}, Fee: {}, Distance: {} km, Specialties: {}{}",
        clinic.id,
        clinic.name,
        clinic.location,
        clinic.rating,
        clinic.consultation_fee,
        clinic.distance_km,
        specialties.join(", "),
        medicines
    )
}

fn print_notification(notification: &Notification) {
    println!("[{}] {}", notification.kind.as_str(), notification.message);
}
