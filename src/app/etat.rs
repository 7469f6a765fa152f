//! src/app/etat.rs
//!
//! État de la session (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, mode,
//! précision, démarche) et offrir des opérations simples (C/CLR/AC) sans
//! logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Bornes sur la précision.

use calculatrice_sci::noyau::format::{DEFAULT_PRECISION, PRECISION_MAX};
use calculatrice_sci::{AngleMode, Demarche};

/// Précision d’affichage par défaut (chiffres significatifs).
pub const PRECISION_DEFAUT: usize = DEFAULT_PRECISION;

/// Garde-fou : on borne la précision.
const PRECISION_MIN: usize = 1;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // dernier résultat affiché
    pub erreur: String,   // message d’erreur (si lecture/éval échoue)

    // --- démarche (jetons + RPN) ---
    pub demarche: Demarche,
    pub demarche_active: bool,

    // --- paramètres ---
    pub angle: AngleMode,
    pub precision: usize,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            demarche_active: false,
            angle: AngleMode::default(),
            precision: PRECISION_DEFAUT,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + paramètres par défaut).
    pub fn reset_total(&mut self) {
        *self = Self::default();
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
    }

    /// Placer une erreur.
    ///
    /// On CONSERVE l’entrée fautive (pour la corriger) et le dernier résultat.
    /// La démarche n’est plus fiable : effacée.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
    }

    /// Déposer un résultat complet (texte affiché + démarche).
    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;
    }

    pub fn set_angle(&mut self, angle: AngleMode) {
        self.angle = angle;
    }

    /// Garde-fou : limite la précision à 1..=100.
    pub fn set_precision(&mut self, precision: usize) {
        self.precision = precision.clamp(PRECISION_MIN, PRECISION_MAX);
    }

    pub fn a_une_erreur(&self) -> bool {
        !self.erreur.is_empty()
    }
}
