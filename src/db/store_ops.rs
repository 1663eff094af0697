// src/db/store_ops.rs
//! Row-level operations on the `keys` table
//!
//! Everything here takes an already-opened (and keyed) connection.
//! A missing row is always surfaced as `CoreError::UnknownKey`.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use crate::aliases::KeyMaterial;
use crate::enums::KeyAlgorithm;
use crate::error::{CoreError, Result};
use crate::keystore::{KeyId, KeyInfo};

/// Insert a new key row, returning its rowid handle
pub fn insert_key(
    conn: &Connection,
    algorithm: KeyAlgorithm,
    material: &KeyMaterial,
    fingerprint: &str,
    label: Option<&str>,
) -> Result<KeyId> {
    conn.execute(
        "INSERT INTO keys (algorithm, material, fingerprint, label, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            algorithm.as_str(),
            material.expose_secret().as_slice(),
            fingerprint,
            label,
            Utc::now().to_rfc3339(),
        ],
    )?;
    Ok(KeyId::new(conn.last_insert_rowid()))
}

/// Load a key's algorithm and material
pub fn load_key(conn: &Connection, key_id: KeyId) -> Result<(KeyAlgorithm, KeyMaterial)> {
    let row: Option<(String, Vec<u8>)> = conn
        .query_row(
            "SELECT algorithm, material FROM keys WHERE key_id = ?1",
            [key_id.raw()],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    match row {
        Some((algorithm, material)) => Ok((
            KeyAlgorithm::from_store_str(&algorithm)?,
            KeyMaterial::new(material),
        )),
        None => Err(CoreError::UnknownKey(key_id)),
    }
}

/// Delete a key row — permanent, there is no history table for keys
pub fn delete_key(conn: &Connection, key_id: KeyId) -> Result<()> {
    let deleted = conn.execute("DELETE FROM keys WHERE key_id = ?1", [key_id.raw()])?;
    if deleted == 0 {
        return Err(CoreError::UnknownKey(key_id));
    }
    Ok(())
}

/// Metadata for one key, without material
pub fn key_info(conn: &Connection, key_id: KeyId) -> Result<KeyInfo> {
    let row = conn
        .query_row(
            "SELECT key_id, algorithm, label, fingerprint, created_at
             FROM keys WHERE key_id = ?1",
            [key_id.raw()],
            map_info_row,
        )
        .optional()?;

    match row {
        Some(info) => finish_info(info),
        None => Err(CoreError::UnknownKey(key_id)),
    }
}

/// Metadata for every key, ordered by id
pub fn list_keys(conn: &Connection) -> Result<Vec<KeyInfo>> {
    let mut stmt = conn.prepare(
        "SELECT key_id, algorithm, label, fingerprint, created_at
         FROM keys ORDER BY key_id",
    )?;
    let rows = stmt.query_map([], map_info_row)?;

    let mut infos = Vec::new();
    for row in rows {
        infos.push(finish_info(row?)?);
    }
    Ok(infos)
}

type RawInfo = (i64, String, Option<String>, String, String);

fn map_info_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawInfo> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
    ))
}

fn finish_info((key_id, algorithm, label, fingerprint, created_at): RawInfo) -> Result<KeyInfo> {
    Ok(KeyInfo {
        key_id: KeyId::new(key_id),
        algorithm: KeyAlgorithm::from_store_str(&algorithm)?,
        label,
        fingerprint,
        created_at,
    })
}

/// Full rows including material — only the export path may call this
pub(crate) fn load_all_keys_with_material(
    conn: &Connection,
) -> Result<Vec<(KeyInfo, KeyMaterial)>> {
    let mut stmt = conn.prepare(
        "SELECT key_id, algorithm, label, fingerprint, created_at, material
         FROM keys ORDER BY key_id",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok((
            (
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, Option<String>>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ),
            row.get::<_, Vec<u8>>(5)?,
        ))
    })?;

    let mut out = Vec::new();
    for row in rows {
        let (raw, material) = row?;
        out.push((finish_info(raw)?, KeyMaterial::new(material)));
    }
    Ok(out)
}
