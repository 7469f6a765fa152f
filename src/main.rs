// src/main.rs
//
// Calculatrice scientifique: point d’entrée ligne de commande
// -------------------------------------------------------------
// - avec une expression : évalue, affiche, code de sortie 1 si erreur
// - sans expression     : session ligne à ligne sur stdin
//
// Une expression qui commence par '-' se passe après `--` :
//   calculatrice-sci -a deg -- -sin(30)

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use calculatrice_sci::AngleMode;

mod app;

use app::etat::PRECISION_DEFAUT;
use app::AppCalc;

#[derive(Parser, Debug)]
#[command(name = "calculatrice-sci", version, about = "Calculatrice scientifique (DEG/RAD)")]
struct Args {
    /// Mode d’angle pour sin/cos/tan et réciproques (DEG ou RAD)
    #[arg(short, long, default_value = "RAD")]
    angle: AngleMode,

    /// Chiffres significatifs affichés (1..=100)
    #[arg(short, long, default_value_t = PRECISION_DEFAUT)]
    precision: usize,

    /// Affiche les jetons et la RPN avant le résultat
    #[arg(short, long)]
    demarche: bool,

    /// Expression à évaluer (sinon : session sur stdin)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,
}

impl Args {
    fn app(&self) -> AppCalc {
        let mut app = AppCalc::default();
        app.set_angle(self.angle);
        app.set_precision(self.precision);
        app.demarche_active = self.demarche;
        app
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let mut app = args.app();

    if args.expression.is_empty() {
        let stdin = io::stdin();
        let stdout = io::stdout();
        return match app::vue::session(&mut app, stdin.lock(), stdout.lock()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("erreur d’entrée/sortie: {e}");
                ExitCode::FAILURE
            }
        };
    }

    app.entree = args.expression.join(" ");
    app.evaluer();

    if app.a_une_erreur() {
        eprintln!("Error: {}", app.erreur);
        return ExitCode::FAILURE;
    }

    let mut out = io::stdout().lock();
    match app.ecrire_sortie(&mut out, "").and_then(|_| out.flush()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("erreur d’entrée/sortie: {e}");
            ExitCode::FAILURE
        }
    }
}
