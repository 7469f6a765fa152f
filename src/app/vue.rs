// src/app/vue.rs
//
// Vue texte (terminal)
// --------------------
// - Une ligne lue = une expression, ou une commande si elle commence par ':'
// - Sortie : "= résultat" ou "Error: message"
// - Démarche (jetons + RPN) affichée avant le résultat si active
//
// Commandes :
//   :deg  :rad  :precision N  :demarche  :clear  :reset  :quit (:q)

use std::io::{self, BufRead, Write};

use calculatrice_sci::{evaluate_with_demarche, format_result, AngleMode, EvalOptions};

use super::etat::AppCalc;

/// Issue du traitement d’une ligne.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Suite {
    Continuer,
    Quitter,
}

impl AppCalc {
    /// Évalue `self.entree` et dépose résultat ou erreur dans l’état.
    pub fn evaluer(&mut self) {
        let opts = EvalOptions::with_angle_mode(self.angle);
        match evaluate_with_demarche(&self.entree, opts) {
            Ok((v, d)) => {
                let txt = format_result(v, self.precision);
                self.set_resultat(txt, d);
            }
            Err(e) => self.set_erreur(e.to_string()),
        }
    }

    /// Traite une ligne de session et écrit la réponse.
    pub fn traiter_ligne<W: Write>(&mut self, ligne: &str, out: &mut W) -> io::Result<Suite> {
        let ligne = ligne.trim();
        if ligne.is_empty() {
            return Ok(Suite::Continuer);
        }

        if let Some(cmd) = ligne.strip_prefix(':') {
            return self.commande(cmd, out);
        }

        self.entree = ligne.to_string();
        self.evaluer();
        self.ecrire_sortie(out, "= ")?;
        Ok(Suite::Continuer)
    }

    fn commande<W: Write>(&mut self, cmd: &str, out: &mut W) -> io::Result<Suite> {
        let mut mots = cmd.split_whitespace();
        let nom = mots.next().unwrap_or("");

        match nom {
            "q" | "quit" => return Ok(Suite::Quitter),
            "deg" => {
                self.set_angle(AngleMode::Deg);
                writeln!(out, "mode {}", self.angle)?;
            }
            "rad" => {
                self.set_angle(AngleMode::Rad);
                writeln!(out, "mode {}", self.angle)?;
            }
            "precision" => match mots.next().map(str::parse::<usize>) {
                Some(Ok(p)) => {
                    self.set_precision(p);
                    writeln!(out, "précision {}", self.precision)?;
                }
                _ => writeln!(out, "usage: :precision N")?,
            },
            "demarche" => {
                self.demarche_active = !self.demarche_active;
                let etat = if self.demarche_active { "on" } else { "off" };
                writeln!(out, "démarche {etat}")?;
            }
            "clear" => {
                self.clear_resultats();
                self.clear_entree();
            }
            "reset" => self.reset_total(),
            _ => writeln!(out, "commande inconnue: :{nom}")?,
        }

        Ok(Suite::Continuer)
    }

    /// Écrit démarche (si active) puis résultat ou erreur.
    pub fn ecrire_sortie<W: Write>(&self, out: &mut W, prefixe: &str) -> io::Result<()> {
        if self.a_une_erreur() {
            return writeln!(out, "Error: {}", self.erreur);
        }
        if self.demarche_active {
            writeln!(out, "  jetons : {}", self.demarche.jetons)?;
            writeln!(out, "  rpn    : {}", self.demarche.rpn)?;
        }
        writeln!(out, "{prefixe}{}", self.resultat)
    }
}

/// Boucle de session : lit jusqu’à EOF ou `:quit`.
pub fn session<R: BufRead, W: Write>(app: &mut AppCalc, entree: R, mut out: W) -> io::Result<()> {
    for ligne in entree.lines() {
        let ligne = ligne?;
        if app.traiter_ligne(&ligne, &mut out)? == Suite::Quitter {
            break;
        }
        out.flush()?;
    }
    Ok(())
}
