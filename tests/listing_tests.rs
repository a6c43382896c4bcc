use runa_ls::app::{ListOptions, Lister};
use runa_ls::core::{RenderConfig, Visibility};
use std::fs;
use tempfile::tempdir;

fn one_column() -> RenderConfig {
    RenderConfig {
        one_column: true,
        ..RenderConfig::default()
    }
}

fn run(
    options: ListOptions,
    config: RenderConfig,
    operands: &[String],
) -> Result<(i32, Vec<String>), Box<dyn std::error::Error>> {
    let mut out = Vec::new();
    let status = Lister::new(options, config).run(operands, &mut out)?;
    let text = String::from_utf8(out)?;
    Ok((status, text.lines().map(str::to_string).collect()))
}

#[test]
fn test_single_directory_has_no_header() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::File::create(dir.path().join("b.txt"))?;
    fs::File::create(dir.path().join("a.txt"))?;
    fs::File::create(dir.path().join(".hidden"))?;
    let root = dir.path().display().to_string();

    let (status, lines) = run(ListOptions::default(), one_column(), &[root.clone()])?;
    assert_eq!(status, 0);
    assert_eq!(lines, ["a.txt", "b.txt"]);

    let hidden = ListOptions {
        visibility: Visibility::OnlyHidden,
        ..ListOptions::default()
    };
    let (_, lines) = run(hidden, one_column(), &[root])?;
    assert_eq!(lines, [".hidden"]);
    Ok(())
}

#[test]
fn test_files_before_directories() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path().display().to_string();
    fs::create_dir(dir.path().join("sub"))?;
    fs::File::create(dir.path().join("sub/inner"))?;
    fs::File::create(dir.path().join("file.txt"))?;

    let operands = [format!("{}/sub", root), format!("{}/file.txt", root)];
    let (status, lines) = run(ListOptions::default(), one_column(), &operands)?;
    assert_eq!(status, 0);
    assert_eq!(
        lines,
        [
            format!("{}/file.txt", root),
            String::new(),
            format!("{}/sub:", root),
            "inner".to_string(),
        ]
    );
    Ok(())
}

#[test]
fn test_list_dirs_flag_lists_the_directory_itself() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path().display().to_string();
    fs::File::create(dir.path().join("inner"))?;

    let options = ListOptions {
        list_dirs: true,
        ..ListOptions::default()
    };
    let (status, lines) = run(options, one_column(), &[root.clone()])?;
    assert_eq!(status, 0);
    assert_eq!(lines, [root]);
    Ok(())
}

#[test]
fn test_missing_operand_sets_status() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path().display().to_string();
    fs::File::create(dir.path().join("present"))?;

    let operands = [format!("{}/absent", root), root.clone()];
    let (status, lines) = run(ListOptions::default(), one_column(), &operands)?;
    assert_eq!(status, 2);
    assert_eq!(lines, [format!("{}:", root), "present".to_string()]);
    Ok(())
}

#[test]
fn test_long_listing_has_total() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path().display().to_string();
    fs::write(dir.path().join("two_k"), vec![b'x'; 2048])?;
    fs::write(dir.path().join("one_k"), vec![b'x'; 1024])?;

    let config = RenderConfig {
        long_format: true,
        ..RenderConfig::default()
    };
    let (status, lines) = run(ListOptions::default(), config, &[root])?;
    assert_eq!(status, 0);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "total 3");
    assert!(lines[1].ends_with(" one_k"), "{}", lines[1]);
    assert!(lines[2].ends_with(" two_k"), "{}", lines[2]);
    Ok(())
}

#[test]
fn test_dot_entries_do_not_count_towards_total() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path().display().to_string();
    fs::write(dir.path().join("data"), vec![b'x'; 2048])?;

    let long = || RenderConfig {
        long_format: true,
        ..RenderConfig::default()
    };
    let all = ListOptions {
        visibility: Visibility::All,
        ..ListOptions::default()
    };
    let (_, plain) = run(ListOptions::default(), long(), &[root.clone()])?;
    let (_, with_dots) = run(all, long(), &[root])?;
    assert_eq!(plain.first().map(String::as_str), Some("total 2"));
    assert_eq!(plain.first(), with_dots.first());
    assert_eq!(with_dots.len(), 4);
    Ok(())
}

#[test]
fn test_file_operands_have_no_total() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("data");
    fs::write(&path, vec![b'x'; 4096])?;

    let config = RenderConfig {
        long_format: true,
        ..RenderConfig::default()
    };
    let (_, lines) = run(
        ListOptions::default(),
        config,
        &[path.display().to_string()],
    )?;
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("-rw"), "{}", lines[0]);
    Ok(())
}

#[test]
fn test_recursive_listing_is_one_batch() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path().display().to_string();
    fs::File::create(dir.path().join("a"))?;
    fs::create_dir_all(dir.path().join("sub/deeper"))?;
    fs::File::create(dir.path().join("sub/b"))?;
    fs::File::create(dir.path().join("sub/deeper/c"))?;

    let options = ListOptions {
        recursive: true,
        ..ListOptions::default()
    };
    let (status, lines) = run(options, one_column(), &[root.clone()])?;
    assert_eq!(status, 0);
    assert_eq!(
        lines,
        [
            format!("{}/a", root),
            format!("{}/sub", root),
            format!("{}/sub/b", root),
            format!("{}/sub/deeper", root),
            format!("{}/sub/deeper/c", root),
        ]
    );
    Ok(())
}

#[test]
fn test_broken_symlink_operand() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let link = dir.path().join("dangling");
    std::os::unix::fs::symlink("does-not-exist", &link)?;

    let config = RenderConfig {
        long_format: true,
        ..RenderConfig::default()
    };
    let (status, lines) = run(
        ListOptions::default(),
        config,
        &[link.display().to_string()],
    )?;
    assert_eq!(status, 0);
    assert!(lines[0].starts_with('l'), "{}", lines[0]);
    assert!(lines[0].ends_with("dangling -> does-not-exist"), "{}", lines[0]);
    Ok(())
}
