use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use regex::bytes::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::member::password::HashedPassword;
use crate::member::{Member, MemberType};
use crate::store::config::StoreConfig;
use crate::store::error::StoreError::{
    CantBrowseThroughFiles, CantCreateMembersFileFolder, CantOpenMembersFile,
    CantOpenMembersFileFolder, CantWriteMembersFile, DuplicateMember, InvalidDate, NoFileFound,
    UnknownMember, WrongRegex,
};
use crate::store::file_details::FileDetails;
use crate::store::{MemberStore, Result};
use crate::tools::{log_error_and_return, log_message};

const MEMBERS_FILE_PATTERN: &str = "^members-(?<year>\\d{4})-(?<month>\\d{2})-(?<day>\\d{2})\\.csv$";
const DELIMITER: u8 = b';';

/// A store persisting its members as `;`-delimited CSV records in dated files
/// (`members-YYYY-MM-DD.csv`) under a configured folder. `open` loads the
/// newest dated file; `save` writes today's file.
#[derive(Debug)]
pub struct CsvMemberStore {
    config: StoreConfig,
    members: Vec<Member>,
    file_details: Option<FileDetails>,
}

impl CsvMemberStore {
    /// Open the store over the configured folder. A missing folder or a folder
    /// without any members file yields an empty store.
    pub fn open(config: StoreConfig) -> Result<Self> {
        match find_latest_members_file(config.folder()) {
            Ok(file_details) => {
                let members = read_members_file(file_details.path())?;
                Ok(Self {
                    config,
                    members,
                    file_details: Some(file_details),
                })
            }
            Err(NoFileFound) => Ok(Self {
                config,
                members: Vec::new(),
                file_details: None,
            }),
            Err(e) => Err(e),
        }
    }

    /// The file the members were loaded from or last saved to, if any.
    pub fn file_details(&self) -> Option<&FileDetails> {
        self.file_details.as_ref()
    }
}

impl MemberStore for CsvMemberStore {
    fn list(&self) -> &[Member] {
        &self.members
    }

    fn find_by_name(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|member| member.name() == name)
    }

    fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Member> {
        self.members.iter_mut().find(|member| member.name() == name)
    }

    fn add(&mut self, member: Member) -> Result<()> {
        if self.find_by_name(member.name()).is_some() {
            return Err(DuplicateMember(member.name().clone()));
        }

        self.members.push(member);
        Ok(())
    }

    fn remove(&mut self, name: &str) -> Result<Member> {
        let position = self
            .members
            .iter()
            .position(|member| member.name() == name)
            .ok_or_else(|| UnknownMember(name.to_owned()))?;

        Ok(self.members.remove(position))
    }

    fn save(&mut self) -> Result<()> {
        std::fs::create_dir_all(self.config.folder())
            .map_err(log_error_and_return(CantCreateMembersFileFolder))?;

        let date = Utc::now().date_naive();
        let path = self.config.folder().join(format!("members-{date}.csv"));
        let mut writer = csv::WriterBuilder::new()
            .delimiter(DELIMITER)
            .from_path(&path)
            .map_err(log_error_and_return(CantWriteMembersFile))?;
        for member in &self.members {
            writer
                .serialize(MemberRecord::from(member))
                .map_err(log_error_and_return(CantWriteMembersFile))?;
        }
        writer
            .flush()
            .map_err(log_error_and_return(CantWriteMembersFile))?;

        debug!("Saved {} members into `{path:?}`.", self.members.len());
        self.file_details = Some(FileDetails::new(date, path));
        Ok(())
    }
}

/// The flat persistence model of a [Member].
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
struct MemberRecord {
    name: String,
    member_type: MemberType,
    salt: String,
    password_hash: String,
}

impl From<&Member> for MemberRecord {
    fn from(member: &Member) -> Self {
        Self {
            name: member.name().clone(),
            member_type: *member.member_type(),
            salt: member.password().salt().clone(),
            password_hash: member.password().hash().clone(),
        }
    }
}

impl From<MemberRecord> for Member {
    fn from(record: MemberRecord) -> Self {
        Member::from_parts(
            record.name,
            record.member_type,
            HashedPassword::from_parts(record.salt, record.password_hash),
        )
    }
}

fn read_members_file(path: &Path) -> Result<Vec<Member>> {
    let file = File::open(path).map_err(|e| {
        error!("Can't open members file `{path:?}`.\n{e:#?}");
        CantOpenMembersFile
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .from_reader(file);
    let members = reader
        .deserialize()
        .filter_map(|result: csv::Result<MemberRecord>| match result {
            Ok(record) => Some(Member::from(record)),
            Err(e) => {
                log_message("Error while reading member")(e);
                None
            }
        })
        .collect();

    Ok(members)
}

fn find_latest_members_file(folder: &Path) -> Result<FileDetails> {
    match std::fs::exists(folder) {
        Ok(true) => Ok(()),
        Ok(false) => Err(NoFileFound),
        Err(e) => {
            error!("Members file folder `{folder:?}` is inaccessible.\n{e:#?}");
            Err(CantOpenMembersFileFolder)
        }
    }?;

    let regex = Regex::new(MEMBERS_FILE_PATTERN).or(Err(WrongRegex))?;
    let paths = std::fs::read_dir(folder).or(Err(CantBrowseThroughFiles))?;

    let mut latest: Option<FileDetails> = None;
    for path in paths {
        let path = path.or(Err(CantBrowseThroughFiles))?;
        let filename = path.file_name();
        if let Some(captures) = regex.captures(filename.as_encoded_bytes()) {
            let date = NaiveDate::from_ymd_opt(
                convert_match_to_integer(&captures, "year")?,
                convert_match_to_integer(&captures, "month")?,
                convert_match_to_integer(&captures, "day")?,
            )
            .ok_or(InvalidDate)?;

            if latest.as_ref().is_none_or(|details| details.date() < &date) {
                latest = Some(FileDetails::new(date, folder.join(&filename)));
            }
        }
    }

    latest.ok_or(NoFileFound)
}

fn convert_match_to_integer<T: FromStr>(captures: &Captures, key: &str) -> Result<T> {
    String::from_utf8_lossy(&captures[key])
        .parse::<T>()
        .or(Err(InvalidDate))
}
