//! Rioplatense vocabulary seen in locally leaked password lists.

pub(super) const PHRASES: &[&str] = &[
    // slang
    "pelotudo", "boludo", "chabón", "chabon", "pibe", "mina", "groso", "grosso", "capo",
    "fenomeno", "fenomenal", "genial",
    // affective
    "amor", "mi amor", "miamor", "corazon", "mi vida", "mivida", "bebe", "bb", "baby", "nena",
    "nene", "gordo", "gorda", "flaco", "flaca", "cielo", "vita",
    // gaming
    "crack", "master", "pro", "noob", "negro", "negra", "blanquito",
    // football
    "boca", "river", "racing", "independiente", "sanlorenzo", "huracan", "velez", "lanus",
    "belgrano", "talleres", "estudiantes", "gimnasia", "newells", "rosariocentral",
    "bocajuniors", "riverplate", "numero10", "numero9", "eldiez", "elnueve",
    // generic
    "password", "contrasena", "contraseña", "miclave", "clave", "micon", "miconta",
    "micuenta",
];

pub(super) const CLUBS: &[&str] = &[
    "boca", "bocajuniors", "river", "riverplate", "racing", "independiente", "sanlorenzo",
    "huracan", "velez", "lanus", "belgrano", "talleres", "estudiantes", "gimnasia", "newells",
    "rosariocentral", "banfield", "platense", "sarmiento", "tigre",
];

pub(super) const JERSEY_NUMBERS: &[&str] = &["1", "10", "9", "11", "123"];

pub(super) const RECENT_YEARS: &[&str] = &["2023", "2024", "2025"];

/// CUIL/CUIT prefixes: men, unassigned-sex overflow, women.
pub(super) const ID_PREFIXES: &[&str] = &["20", "23", "24", "27"];
