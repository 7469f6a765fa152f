//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : pour une expression générée avec sa valeur de référence,
//!   le noyau rend la même valeur OU la même erreur (même première erreur)

use std::time::{Duration, Instant};

use super::{evaluate, format_result, AngleMode, CalcError, EvalOptions, DEFAULT_PRECISION};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

/// Expression générée + valeur de référence calculée en parallèle,
/// dans l’ordre où la RPN l’évalue (gauche, droite, opérateur).
type Gen = (String, Result<f64, CalcError>);

fn gen_atom(rng: &mut Rng) -> Gen {
    match rng.pick(6) {
        0 => ("0".to_string(), Ok(0.0)),
        1 => ("pi".to_string(), Ok(std::f64::consts::PI)),
        2 => ("2.5".to_string(), Ok(2.5)),
        3 => ("(-3)".to_string(), Ok(-3.0)),
        4 => (".25".to_string(), Ok(0.25)),
        _ => {
            let n = rng.pick(10);
            (format!("{n}"), Ok(f64::from(n)))
        }
    }
}

fn binaire(
    a: Gen,
    b: Gen,
    sym: &str,
    f: impl Fn(f64, f64) -> Result<f64, CalcError>,
) -> Gen {
    let texte = format!("({}{sym}{})", a.0, b.0);
    let v = match (a.1, b.1) {
        (Err(e), _) => Err(e),
        (Ok(_), Err(e)) => Err(e),
        (Ok(x), Ok(y)) => f(x, y),
    };
    (texte, v)
}

fn fonction(a: Gen, nom: &str, f: impl Fn(f64) -> Result<f64, CalcError>) -> Gen {
    (format!("{nom}({})", a.0), a.1.and_then(f))
}

fn gen_expr(rng: &mut Rng, depth: usize) -> Gen {
    if depth == 0 {
        return gen_atom(rng);
    }

    match rng.pick(11) {
        0 => gen_atom(rng),
        1 => binaire(gen_expr(rng, depth - 1), gen_expr(rng, depth - 1), "+", |x, y| {
            Ok(x + y)
        }),
        2 => binaire(gen_expr(rng, depth - 1), gen_expr(rng, depth - 1), "-", |x, y| {
            Ok(x - y)
        }),
        3 => binaire(gen_expr(rng, depth - 1), gen_expr(rng, depth - 1), "*", |x, y| {
            Ok(x * y)
        }),
        4 => binaire(gen_expr(rng, depth - 1), gen_expr(rng, depth - 1), "/", |x, y| {
            if y == 0.0 {
                Err(CalcError::DivisionByZero)
            } else {
                Ok(x / y)
            }
        }),
        5 => {
            let (t, v) = gen_expr(rng, depth - 1);
            (format!("-({t})"), v.map(|x| -x))
        }
        6 => fonction(gen_expr(rng, depth - 1), "sqrt", |x| {
            if x < 0.0 {
                Err(CalcError::SqrtDomain)
            } else {
                Ok(x.sqrt())
            }
        }),
        7 => fonction(gen_expr(rng, depth - 1), "ln", |x| {
            if x <= 0.0 {
                Err(CalcError::LnDomain)
            } else {
                Ok(x.ln())
            }
        }),
        8 => fonction(gen_expr(rng, depth - 1), "abs", |x| Ok(x.abs())),
        9 => fonction(gen_expr(rng, depth - 1), "cos", |x| Ok(x.cos())),
        _ => {
            // exposant entier petit : garde des valeurs raisonnables
            let e = rng.pick(4);
            let (t, v) = gen_expr(rng, depth - 1);
            (format!("({t})^{e}"), v.map(|x| x.powf(f64::from(e))))
        }
    }
}

fn memes_valeurs(a: f64, b: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    a == b
}

/// Texte quelconque sur un petit alphabet (valide ou non).
fn gen_bruit(rng: &mut Rng, len: usize) -> String {
    const ALPHABET: &[&str] = &[
        "1", "2", ".", "+", "-", "*", "/", "^", "(", ")", " ", "pi", "π", "e", "sin", "√",
        "log", "x", "%", "τ",
    ];
    let mut s = String::new();
    for _ in 0..len {
        s.push_str(ALPHABET[rng.pick(ALPHABET.len() as u32) as usize]);
    }
    s
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_reference_et_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let (expr, attendu) = gen_expr(&mut rng, 5);
        let obtenu = evaluate(&expr, EvalOptions::default());

        match (&obtenu, &attendu) {
            (Ok(a), Ok(b)) => {
                assert!(memes_valeurs(*a, *b), "expr={expr:?} noyau={a} ref={b}");
                seen_ok += 1;
            }
            (Err(a), Err(b)) => {
                assert_eq!(a, b, "expr={expr:?}");
                seen_err += 1;
            }
            _ => panic!("expr={expr:?} noyau={obtenu:?} ref={attendu:?}"),
        }

        // déterminisme : deuxième passage identique
        let bis = evaluate(&expr, EvalOptions::default());
        match (&obtenu, &bis) {
            (Ok(a), Ok(b)) => assert!(memes_valeurs(*a, *b)),
            (Err(a), Err(b)) => assert_eq!(a, b),
            _ => panic!("non déterministe: expr={expr:?}"),
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 30, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..2_000 {
        budget(t0, max);

        let len = 1 + rng.pick(12) as usize;
        let s = gen_bruit(&mut rng, len);
        let mode = if rng.coin() {
            AngleMode::Deg
        } else {
            AngleMode::Rad
        };

        // aucune panique ; en cas de succès, l’affichage est toujours défini
        if let Ok(v) = evaluate(&s, EvalOptions::with_angle_mode(mode)) {
            assert!(!format_result(v, DEFAULT_PRECISION).is_empty(), "s={s:?}");
        }
    }
}

#[test]
fn fuzz_safe_mode_angle_hors_trig_neutre() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..150 {
        budget(t0, max);

        // gen_expr n’utilise que cos parmi les fonctions trig : on la retire
        let (expr, _) = gen_expr(&mut rng, 4);
        if expr.contains("cos") {
            continue;
        }

        let r = evaluate(&expr, EvalOptions::with_angle_mode(AngleMode::Rad));
        let d = evaluate(&expr, EvalOptions::with_angle_mode(AngleMode::Deg));
        match (&r, &d) {
            (Ok(a), Ok(b)) => assert!(memes_valeurs(*a, *b), "expr={expr:?}"),
            (Err(a), Err(b)) => assert_eq!(a, b, "expr={expr:?}"),
            _ => panic!("expr={expr:?} rad={r:?} deg={d:?}"),
        }
    }
}
