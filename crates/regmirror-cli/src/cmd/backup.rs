use regmirror_core::BackupFile;
use regmirror_core::backup::{package_file_name, tag_file_name};

/// One line per file: `tag\t<tag>`, `package\t<version>` or `unknown`,
/// followed by the file name.
pub fn decode(files: &[String]) {
    for file in files {
        match BackupFile::parse(file) {
            Some(BackupFile::Tag(tag)) => println!("tag\t{tag}\t{file}"),
            Some(BackupFile::Package(version)) => println!("package\t{version}\t{file}"),
            None => println!("unknown\t\t{file}"),
        }
    }
}

pub fn encode_tag(tag: &str) {
    println!("{}", tag_file_name(tag));
}

pub fn encode_version(version: &str) {
    println!("{}", package_file_name(version));
}
